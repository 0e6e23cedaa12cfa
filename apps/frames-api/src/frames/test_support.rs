//! Recording stand-in for the rendering provider.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;

use crate::models::frame::RenderedFrame;
use crate::provider::{ProviderError, RenderProvider, RenderSubmission, RenderedAsset};

const STUB_URL_PREFIX: &str = "https://stub.test/frame/";

#[derive(Default)]
pub struct StubProvider {
    fail_submit_on: Vec<u8>,
    fail_fetch_on: Vec<u8>,
    descending_delays: bool,
    submissions: Mutex<Vec<RenderSubmission>>,
    fetches: AtomicUsize,
}

impl StubProvider {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing_on(frame: u8) -> Self {
        Self::failing_on_frames(&[frame])
    }

    pub fn failing_on_frames(frames: &[u8]) -> Self {
        Self {
            fail_submit_on: frames.to_vec(),
            ..Self::default()
        }
    }

    pub fn failing_fetch_on(frame: u8) -> Self {
        Self {
            fail_fetch_on: vec![frame],
            ..Self::default()
        }
    }

    /// Frame 1 answers slowest, frame 4 fastest.
    pub fn with_descending_delays(mut self) -> Self {
        self.descending_delays = true;
        self
    }

    pub fn submissions(&self) -> Vec<RenderSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn submitted_frames(&self) -> Vec<u8> {
        self.submissions().iter().map(|s| s.frame.get()).collect()
    }

    pub fn submit_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn image_bytes(frame: u8) -> Vec<u8> {
        format!("png-bytes-{frame}").into_bytes()
    }

    /// What the pipeline should produce for `frame` given this stub's bytes.
    pub fn expected_frame(frame: u8) -> RenderedFrame {
        RenderedFrame {
            encoded_image: format!(
                "data:image/png;base64,{}",
                STANDARD.encode(Self::image_bytes(frame))
            ),
        }
    }
}

#[async_trait]
impl RenderProvider for StubProvider {
    async fn submit(&self, submission: &RenderSubmission) -> Result<RenderedAsset, ProviderError> {
        let frame = submission.frame.get();
        self.submissions.lock().unwrap().push(submission.clone());

        if self.descending_delays {
            tokio::time::sleep(Duration::from_millis(u64::from(5 - frame) * 10)).await;
        }

        if self.fail_submit_on.contains(&frame) {
            return Err(ProviderError::Api {
                status: 500,
                message: format!("stub failure on frame {frame}"),
            });
        }

        Ok(RenderedAsset {
            public_id: submission.public_id.clone(),
            secure_url: format!("{STUB_URL_PREFIX}{frame}"),
        })
    }

    async fn fetch(&self, asset: &RenderedAsset) -> Result<Bytes, ProviderError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let frame: u8 = asset
            .secure_url
            .strip_prefix(STUB_URL_PREFIX)
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| ProviderError::MalformedResponse(asset.secure_url.clone()))?;

        if self.fail_fetch_on.contains(&frame) {
            return Err(ProviderError::Retrieval {
                status: 404,
                url: asset.secure_url.clone(),
            });
        }

        Ok(Bytes::from(Self::image_bytes(frame)))
    }
}
