//! Template Builder: one complete HTML document per frame.
//!
//! Pure and deterministic: identical `(text, frame, height)` always produce
//! byte-identical output. No I/O.

use crate::frames::markup::{
    CANVAS_WIDTH_PX, CTA_LABEL, FRAME_DOCUMENT, INFO_LINES, PRICE_HEADING, SUBTITLE, TITLE,
};
use crate::frames::palette::{highlighted_line, FramePalette};
use crate::models::frame::FrameIndex;

/// Builds the markup document for `frame` with a canvas of `height` pixels.
pub fn build_document(text: &str, frame: FrameIndex, height: u32) -> String {
    let palette = FramePalette::for_frame(frame);

    FRAME_DOCUMENT
        .replace("{width}", &CANVAS_WIDTH_PX.to_string())
        .replace("{height}", &height.to_string())
        .replace("{frame_index}", &frame.to_string())
        .replace("{title_gradient}", palette.title_gradient)
        .replace("{icon_scale}", palette.icon_scale)
        .replace("{highlight_color}", palette.highlight_color)
        .replace("{cta_gradient}", palette.cta_gradient)
        .replace("{cta_border}", palette.cta_border)
        .replace("{cta_glow}", palette.cta_glow)
        .replace("{price_color}", palette.price_color)
        .replace("{price_shadow}", palette.price_shadow)
        .replace("{title}", TITLE)
        .replace("{subtitle}", SUBTITLE)
        .replace("{cta_label}", CTA_LABEL)
        .replace("{price_heading}", PRICE_HEADING)
        .replace("{info_items}", &info_items(frame))
        // User text last so its content is never treated as a placeholder.
        .replace("{user_text}", &text_to_markup(text))
}

fn info_items(frame: FrameIndex) -> String {
    let highlighted = usize::from(highlighted_line(frame));
    INFO_LINES
        .iter()
        .enumerate()
        .map(|(i, (icon, label))| {
            let class = if i + 1 == highlighted {
                r#" class="highlighted""#
            } else {
                ""
            };
            format!(r#"      <li{class}><span class="icon">{icon}</span>{label}</li>"#)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escapes markup-significant characters and turns each `\n` into `<br>`.
pub fn text_to_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("<br>"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(n: u8) -> FrameIndex {
        FrameIndex::new(n).unwrap()
    }

    #[test]
    fn test_build_is_deterministic() {
        let text = "Rare ring: 100\nAncestral helm: 250";
        for f in FrameIndex::ALL {
            assert_eq!(build_document(text, f, 975), build_document(text, f, 975));
        }
    }

    #[test]
    fn test_frames_differ_from_each_other() {
        let docs: Vec<String> = FrameIndex::ALL
            .iter()
            .map(|f| build_document("same text", *f, 900))
            .collect();
        for (i, a) in docs.iter().enumerate() {
            for b in &docs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_embeds_text_with_line_breaks() {
        let doc = build_document("first line\nsecond line\nthird", frame(2), 900);
        assert!(doc.contains("first line<br>second line<br>third"));
    }

    #[test]
    fn test_preserves_unicode_text_in_order() {
        let text = "실시간 가격표\n아이템1: 100원\n아이템2: 200원";
        let doc = build_document(text, frame(1), 900);
        assert!(doc.contains("실시간 가격표<br>아이템1: 100원<br>아이템2: 200원"));
    }

    #[test]
    fn test_escapes_markup_in_user_text() {
        let doc = build_document("<script>alert('x')</script> & more", frame(1), 900);
        assert!(doc.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
        assert!(!doc.contains("<script>"));
    }

    #[test]
    fn test_placeholder_like_text_is_not_expanded() {
        let doc = build_document("{height} {title}", frame(1), 1234);
        assert!(doc.contains(r#"<div class="description">{height} {title}</div>"#));
    }

    #[test]
    fn test_canvas_dimensions_are_embedded() {
        let doc = build_document("x", frame(3), 1450);
        assert!(doc.contains("width: 720px;"));
        assert!(doc.contains("height: 1450px;"));
    }

    #[test]
    fn test_exactly_one_highlighted_line_matching_frame() {
        for f in FrameIndex::ALL {
            let doc = build_document("x", f, 900);
            assert_eq!(doc.matches(r#"<li class="highlighted">"#).count(), 1);

            let items: Vec<&str> = doc
                .lines()
                .map(str::trim_start)
                .filter(|l| l.starts_with("<li>") || l.starts_with("<li "))
                .collect();
            assert_eq!(items.len(), 4);
            let position = items
                .iter()
                .position(|l| l.contains(r#"class="highlighted""#))
                .unwrap();
            assert_eq!(position + 1, usize::from(f.get()));
        }
    }

    #[test]
    fn test_head_link_is_not_a_list_item() {
        let doc = build_document("x", frame(1), 900);
        assert!(doc.lines().any(|l| l.trim_start().starts_with("<link")));
        let list_items = doc
            .lines()
            .map(str::trim_start)
            .filter(|l| l.starts_with("<li>") || l.starts_with("<li "))
            .count();
        assert_eq!(list_items, 4);
    }

    #[test]
    fn test_title_gradient_follows_frame() {
        let doc = build_document("x", frame(3), 900);
        assert!(doc.contains("linear-gradient(135deg, #ff8c00, #ff6347, #ff4500)"));
        assert!(doc.contains(r#"class="render-target frame-3""#));
    }

    #[test]
    fn test_no_placeholders_left_behind() {
        let doc = build_document("plain", frame(4), 900);
        for placeholder in [
            "{width}",
            "{height}",
            "{frame_index}",
            "{title_gradient}",
            "{icon_scale}",
            "{highlight_color}",
            "{cta_gradient}",
            "{cta_border}",
            "{cta_glow}",
            "{price_color}",
            "{price_shadow}",
            "{title}",
            "{subtitle}",
            "{cta_label}",
            "{price_heading}",
            "{info_items}",
            "{user_text}",
        ] {
            assert!(!doc.contains(placeholder), "{placeholder} left in document");
        }
    }
}
