//! Axum route handlers for the frame generation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::frames::pipeline::generate_frames;
use crate::models::frame::{RenderedFrame, FRAME_COUNT};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateFramesRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFramesResponse {
    pub success: bool,
    pub frames: Vec<RenderedFrame>,
    pub frame_count: usize,
    pub dynamic_height: u32,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-frames
///
/// Renders the text into four frames and returns them as PNG data URIs.
/// All four or none.
pub async fn handle_generate_frames(
    State(state): State<AppState>,
    payload: Result<Json<GenerateFramesRequest>, JsonRejection>,
) -> Response {
    match generate(&state, payload).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => err.into_response_with(state.config.expose_error_details),
    }
}

async fn generate(
    state: &AppState,
    payload: Result<Json<GenerateFramesRequest>, JsonRejection>,
) -> Result<GenerateFramesResponse, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::Validation(format!("invalid request body: {rejection}")))?;
    let text = request.text.unwrap_or_default();

    let frame_set =
        generate_frames(state.provider.as_ref(), &text, state.config.render_mode).await?;

    Ok(GenerateFramesResponse {
        success: true,
        frame_count: FRAME_COUNT,
        frames: frame_set.frames,
        dynamic_height: frame_set.dynamic_height,
        message: "Frames generated".to_string(),
    })
}

/// OPTIONS /api/generate-frames
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on /api/generate-frames.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
