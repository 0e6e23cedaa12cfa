//! Per-frame visual treatment.
//!
//! Title colors move warm → hot across frames 1..4. The call-to-action glow
//! grows to a peak on frame 3 and eases back on frame 4 so the loop closes.

use crate::models::frame::FrameIndex;

/// Number of fixed informational lines in the document.
pub const INFO_LINE_COUNT: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePalette {
    pub title_gradient: &'static str,
    pub icon_scale: &'static str,
    pub highlight_color: &'static str,
    pub cta_gradient: &'static str,
    pub cta_border: &'static str,
    pub cta_glow: &'static str,
    pub price_color: &'static str,
    pub price_shadow: &'static str,
}

const FRAME_1: FramePalette = FramePalette {
    title_gradient: "45deg, #ffd700, #ffb347, #ff8c00",
    icon_scale: "1.0",
    highlight_color: "#ff6666",
    cta_gradient: "45deg, #4169e1, #6a5acd, #8a2be2",
    cta_border: "#4169e1",
    cta_glow: "0 0 20px rgba(65, 105, 225, 0.4)",
    price_color: "#ffaa00",
    price_shadow: "0 0 4px rgba(255, 170, 0, 0.7)",
};

const FRAME_2: FramePalette = FramePalette {
    title_gradient: "90deg, #ffb347, #ff8c00, #ff6347",
    icon_scale: "1.05",
    highlight_color: "#66ff66",
    cta_gradient: "90deg, #6a5acd, #8a2be2, #9370db",
    cta_border: "#6a5acd",
    cta_glow: "0 0 22px rgba(106, 90, 205, 0.5)",
    price_color: "#ff6600",
    price_shadow: "0 0 2px rgba(255, 102, 0, 0.8)",
};

const FRAME_3: FramePalette = FramePalette {
    title_gradient: "135deg, #ff8c00, #ff6347, #ff4500",
    icon_scale: "1.1",
    highlight_color: "#6666ff",
    cta_gradient: "135deg, #8a2be2, #9370db, #ba55d3",
    cta_border: "#8a2be2",
    cta_glow: "0 0 25px rgba(138, 43, 226, 0.6)",
    price_color: "#ff0066",
    price_shadow: "0 0 4px rgba(255, 0, 102, 0.9)",
};

const FRAME_4: FramePalette = FramePalette {
    title_gradient: "180deg, #ff6347, #ff4500, #ffd700",
    icon_scale: "1.05",
    highlight_color: "#ffff66",
    cta_gradient: "180deg, #9370db, #ba55d3, #4169e1",
    cta_border: "#9370db",
    cta_glow: "0 0 22px rgba(147, 112, 219, 0.5)",
    price_color: "#ffaa00",
    price_shadow: "0 0 5px rgba(255, 170, 0, 0.7)",
};

impl FramePalette {
    pub fn for_frame(frame: FrameIndex) -> FramePalette {
        match frame.get() {
            1 => FRAME_1,
            2 => FRAME_2,
            3 => FRAME_3,
            _ => FRAME_4,
        }
    }
}

/// 1-based position of the informational line emphasised in `frame`.
pub fn highlighted_line(frame: FrameIndex) -> u8 {
    (frame.get() - 1) % INFO_LINE_COUNT + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_frame_has_distinct_title_gradient() {
        let gradients: Vec<&str> = FrameIndex::ALL
            .iter()
            .map(|f| FramePalette::for_frame(*f).title_gradient)
            .collect();
        for (i, a) in gradients.iter().enumerate() {
            for b in &gradients[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_highlighted_line_follows_frame_index() {
        for frame in FrameIndex::ALL {
            assert_eq!(highlighted_line(frame), frame.get());
        }
    }

    #[test]
    fn test_cta_glow_peaks_on_frame_three() {
        let glows: Vec<&str> = FrameIndex::ALL
            .iter()
            .map(|f| FramePalette::for_frame(*f).cta_glow)
            .collect();
        assert!(glows[0].contains("20px"));
        assert!(glows[1].contains("22px"));
        assert!(glows[2].contains("25px"));
        assert!(glows[3].contains("22px"));
    }
}
