use std::fmt;

use serde::Serialize;

/// Number of frames in one animation cycle.
pub const FRAME_COUNT: usize = 4;

/// 1-based position of a frame within the animation cycle. Always in `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(u8);

impl FrameIndex {
    pub const ALL: [FrameIndex; FRAME_COUNT] =
        [FrameIndex(1), FrameIndex(2), FrameIndex(3), FrameIndex(4)];

    #[cfg(test)]
    pub fn new(value: u8) -> Option<Self> {
        (1..=FRAME_COUNT as u8)
            .contains(&value)
            .then_some(FrameIndex(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-frame input bundle handed to the renderer. Built fresh for each frame.
#[derive(Debug, Clone)]
pub struct FrameSpec<'a> {
    pub frame: FrameIndex,
    pub text: &'a str,
    pub height: u32,
}

/// One rendered frame as a `data:image/png;base64,...` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedFrame {
    pub encoded_image: String,
}

/// All four frames of a successful pipeline run, in frame order.
#[derive(Debug, Clone)]
pub struct FrameSet {
    pub frames: Vec<RenderedFrame>,
    pub dynamic_height: u32,
}
