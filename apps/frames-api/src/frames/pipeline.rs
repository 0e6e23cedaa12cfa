//! Pipeline Orchestrator: validate → size → render frames 1..4 → aggregate.
//!
//! All-or-nothing: the first failing frame aborts the run and no partial
//! results are returned. Nothing is retried.

use std::str::FromStr;

use futures::future::join_all;
use tracing::info;

use crate::errors::AppError;
use crate::frames::renderer::render_frame;
use crate::frames::sizing::dynamic_height;
use crate::models::frame::{FrameIndex, FrameSet, FrameSpec, RenderedFrame, FRAME_COUNT};
use crate::provider::RenderProvider;

/// How the four provider round trips are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Frame N+1 starts only after frame N has been fetched.
    #[default]
    Sequential,
    /// All four submitted at once; order and lowest-index failure are kept.
    Concurrent,
}

impl FromStr for RenderMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(RenderMode::Sequential),
            "concurrent" => Ok(RenderMode::Concurrent),
            other => anyhow::bail!("unknown render mode '{other}'"),
        }
    }
}

/// Runs the full frame pipeline for one request.
///
/// Steps:
/// 1. reject empty / whitespace-only text before touching the provider
/// 2. dynamic_height() once, shared by all frames
/// 3. render_frame() for frames 1..=4
/// 4. abort on the first failure, else return the frames in order
pub async fn generate_frames(
    provider: &dyn RenderProvider,
    text: &str,
    mode: RenderMode,
) -> Result<FrameSet, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    info!("Generating frames for {} chars of text", text.chars().count());

    let height = dynamic_height(text);
    info!("Computed canvas height: {height}px");

    let frames = match mode {
        RenderMode::Sequential => render_sequential(provider, text, height).await?,
        RenderMode::Concurrent => render_concurrent(provider, text, height).await?,
    };

    info!("All {} frames rendered", frames.len());

    Ok(FrameSet {
        frames,
        dynamic_height: height,
    })
}

async fn render_sequential(
    provider: &dyn RenderProvider,
    text: &str,
    height: u32,
) -> Result<Vec<RenderedFrame>, AppError> {
    let mut frames = Vec::with_capacity(FRAME_COUNT);
    for frame in FrameIndex::ALL {
        let spec = FrameSpec {
            frame,
            text,
            height,
        };
        frames.push(render_frame(provider, &spec).await?);
    }
    Ok(frames)
}

async fn render_concurrent(
    provider: &dyn RenderProvider,
    text: &str,
    height: u32,
) -> Result<Vec<RenderedFrame>, AppError> {
    let specs: Vec<FrameSpec<'_>> = FrameIndex::ALL
        .into_iter()
        .map(|frame| FrameSpec {
            frame,
            text,
            height,
        })
        .collect();

    // join_all yields results in input order, so collecting into a Result
    // surfaces the lowest failing frame.
    join_all(specs.iter().map(|spec| render_frame(provider, spec)))
        .await
        .into_iter()
        .collect()
}
