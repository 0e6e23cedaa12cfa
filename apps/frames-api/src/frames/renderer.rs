//! Frame Renderer: one provider round trip per frame.
//!
//! markup → `data:text/html` URI → provider submit → fetch → `data:image/png` URI.

use std::time::Instant;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;
use tracing::{error, info};

use crate::errors::AppError;
use crate::frames::markup::CANVAS_WIDTH_PX;
use crate::frames::template::build_document;
use crate::models::frame::{FrameSpec, RenderedFrame};
use crate::provider::{ProviderError, RenderProvider, RenderSubmission, RenderedAsset};

const OUTPUT_FORMAT: &str = "png";
const OUTPUT_MEDIA_TYPE: &str = "image/png";
const RENDER_QUALITY: u8 = 90;
const CROP_MODE: &str = "limit";
const CACHE_FLAGS: &str = "immutable_cache";
const PUBLIC_ID_PREFIX: &str = "frame";

/// Renders a single frame. Errors are not retried; they come back tagged with
/// the frame index.
pub async fn render_frame(
    provider: &dyn RenderProvider,
    spec: &FrameSpec<'_>,
) -> Result<RenderedFrame, AppError> {
    let started_at = Instant::now();
    let document = build_document(spec.text, spec.frame, spec.height);
    let submission = RenderSubmission {
        frame: spec.frame,
        public_id: public_id(spec, chrono::Utc::now().timestamp_millis()),
        file: data_uri("text/html", document.as_bytes()),
        format: OUTPUT_FORMAT,
        width: CANVAS_WIDTH_PX,
        height: spec.height,
        crop: CROP_MODE,
        quality: RENDER_QUALITY,
        flags: CACHE_FLAGS,
    };

    info!(
        frame = spec.frame.get(),
        public_id = %submission.public_id,
        document_bytes = document.len(),
        "Rendering frame"
    );

    let (asset, bytes) = submit_and_fetch(provider, &submission).await.map_err(|source| {
        error!(
            frame = spec.frame.get(),
            elapsed_ms = elapsed_ms(started_at),
            error = %source,
            "Frame render failed"
        );
        AppError::FrameRender {
            frame: spec.frame,
            source,
        }
    })?;

    info!(
        frame = spec.frame.get(),
        public_id = %asset.public_id,
        url = %asset.secure_url,
        image_bytes = bytes.len(),
        elapsed_ms = elapsed_ms(started_at),
        "Frame rendered"
    );

    Ok(RenderedFrame {
        encoded_image: data_uri(OUTPUT_MEDIA_TYPE, &bytes),
    })
}

async fn submit_and_fetch(
    provider: &dyn RenderProvider,
    submission: &RenderSubmission,
) -> Result<(RenderedAsset, Bytes), ProviderError> {
    let asset = provider.submit(submission).await?;
    let bytes = provider.fetch(&asset).await?;
    Ok((asset, bytes))
}

fn elapsed_ms(started_at: Instant) -> u64 {
    u64::try_from(started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Provider-side identifier, unique per frame and generation time.
fn public_id(spec: &FrameSpec<'_>, timestamp_millis: i64) -> String {
    format!("{PUBLIC_ID_PREFIX}_{}_{timestamp_millis}", spec.frame)
}

fn data_uri(media_type: &str, payload: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(payload))
}
