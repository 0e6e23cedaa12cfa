use std::error::Error as _;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::models::frame::FrameIndex;
use crate::provider::ProviderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// A single frame's submission or retrieval failed. Aborts the run.
    #[error("Frame {frame} render failed: {source}")]
    FrameRender {
        frame: FrameIndex,
        source: ProviderError,
    },
}

/// Failure body shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Builds the response, attaching the source chain as `details` for
    /// server errors when `expose_details` is set.
    pub fn into_response_with(self, expose_details: bool) -> Response {
        let (status, message, details) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
                None,
            ),
            AppError::FrameRender { frame, source } => {
                tracing::error!("Frame generation failed on frame {frame}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to generate frames: {self}"),
                    expose_details.then(|| error_chain(&self)),
                )
            }
        };

        let body = Json(ErrorBody {
            success: false,
            error: message,
            details,
        });

        (status, body).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_response_with(false)
    }
}

/// Renders an error and every `source()` below it, one per line.
fn error_chain(err: &AppError) -> String {
    let mut lines = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(format!("caused by: {cause}"));
        source = cause.source();
    }
    lines.join("\n")
}
