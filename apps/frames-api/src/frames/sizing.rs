//! Layout Sizer: canvas height from the number of text lines.
//!
//! height = BASE + lines × LINE + PADDING, clamped to [MIN, MAX].
//! Content past MAX is clipped by the canvas, never re-flowed.

/// Fixed regions: title, info list, call-to-action.
const BASE_HEIGHT_PX: u32 = 600;
const LINE_HEIGHT_PX: u32 = 25;
const PADDING_PX: u32 = 100;
pub const MIN_HEIGHT_PX: u32 = 900;
/// Upper bound the provider renders reliably.
pub const MAX_HEIGHT_PX: u32 = 5000;

/// Counts `'\n'`-separated segments. A trailing empty segment counts, and the
/// empty string is one line.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

/// Computes the shared canvas height for all frames of one request.
pub fn dynamic_height(text: &str) -> u32 {
    let lines = u32::try_from(count_lines(text)).unwrap_or(u32::MAX);
    BASE_HEIGHT_PX
        .saturating_add(lines.saturating_mul(LINE_HEIGHT_PX))
        .saturating_add(PADDING_PX)
        .clamp(MIN_HEIGHT_PX, MAX_HEIGHT_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> String {
        vec!["line"; n].join("\n")
    }

    #[test]
    fn test_single_line_hits_floor() {
        assert_eq!(dynamic_height("hello"), 900);
    }

    #[test]
    fn test_ten_lines_is_unclamped() {
        assert_eq!(dynamic_height(&lines(10)), 950);
    }

    #[test]
    fn test_two_hundred_lines_hits_ceiling() {
        assert_eq!(dynamic_height(&lines(200)), 5000);
    }

    #[test]
    fn test_matches_formula_across_range() {
        for k in 1..=260 {
            let expected = (600 + 25 * k as u32 + 100).clamp(900, 5000);
            assert_eq!(dynamic_height(&lines(k)), expected, "k = {k}");
        }
    }

    #[test]
    fn test_trailing_newline_counts_as_line() {
        assert_eq!(count_lines("a\n"), 2);
        assert_eq!(count_lines("a\nb"), 2);
        assert_eq!(count_lines(""), 1);
    }

    #[test]
    fn test_empty_text_is_total() {
        assert_eq!(dynamic_height(""), MIN_HEIGHT_PX);
    }
}
