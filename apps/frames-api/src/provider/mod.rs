//! Rendering provider is the seam between the frame pipeline and the external
//! HTML-to-image service.
//!
//! The pipeline only talks to `dyn RenderProvider`. Production wires in
//! `CloudinaryClient`; tests wire in a recording stub.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::models::frame::FrameIndex;

pub mod cloudinary;

pub use cloudinary::CloudinaryClient;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider credentials are not configured (missing {0})")]
    MissingCredentials(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider rejected render (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("failed to retrieve rendered image (status {status}) from {url}")]
    Retrieval { status: u16, url: String },
}

/// One render job as handed to the provider.
#[derive(Debug, Clone)]
pub struct RenderSubmission {
    pub frame: FrameIndex,
    pub public_id: String,
    /// The markup document as a `data:text/html;base64,...` URI.
    pub file: String,
    pub format: &'static str,
    pub width: u32,
    pub height: u32,
    /// `limit` shrinks to fit but never upscales.
    pub crop: &'static str,
    pub quality: u8,
    pub flags: &'static str,
}

/// Location of a rendered artifact stored by the provider.
#[derive(Debug, Clone)]
pub struct RenderedAsset {
    pub public_id: String,
    pub secure_url: String,
}

/// External rasterizer. Implementations must not retry; the pipeline reports
/// the first error it sees.
#[async_trait]
pub trait RenderProvider: Send + Sync {
    /// Submits a markup document for rasterization.
    async fn submit(&self, submission: &RenderSubmission) -> Result<RenderedAsset, ProviderError>;

    /// Downloads the rendered image bytes.
    async fn fetch(&self, asset: &RenderedAsset) -> Result<Bytes, ProviderError>;
}
