//! Detecting and toggling comment wrappers on a single buffer line.

use unicode_segmentation::UnicodeSegmentation;

use super::host::LineEditor;
use crate::atoms::glyph::glyph_width;
use crate::types::{Classification, CommentStyle};

const SEPARATOR: &str = " ";

/// Decide whether `row` already has the canonical `<prefix> ... <suffix>`
/// form for `style`.
///
/// Only the anchors are checked: the prefix and the space after it at the
/// start, and the space plus suffix at the end. The text between them is
/// never inspected.
pub fn classify<E>(editor: &E, row: usize, style: &CommentStyle) -> Classification
where
    E: LineEditor + ?Sized,
{
    let width = editor.visual_width(row);
    if width == 0 || width < style.min_commented_width() {
        return Classification::NotCommented;
    }

    let mut col = 1;
    for glyph in style.prefix().graphemes(true) {
        if editor.glyph_at(row, col) != Some(glyph) {
            return Classification::NotCommented;
        }
        col += glyph_width(glyph);
    }
    if editor.glyph_at(row, col) != Some(SEPARATOR) {
        return Classification::NotCommented;
    }

    if let Some(suffix) = style.suffix() {
        // Walk the trailing window from the last column backwards, stepping
        // by each glyph's display width.
        let mut col = width;
        for glyph in suffix.graphemes(true).rev() {
            if editor.glyph_at(row, col) != Some(glyph) {
                return Classification::NotCommented;
            }
            col = col.saturating_sub(glyph_width(glyph));
        }
        if editor.glyph_at(row, col) != Some(SEPARATOR) {
            return Classification::NotCommented;
        }
    }

    Classification::Commented
}

/// Wrap `row` as `<prefix> <content>` or `<prefix> <content> <suffix>`.
pub fn comment_line<E>(editor: &mut E, row: usize, style: &CommentStyle)
where
    E: LineEditor + ?Sized,
{
    editor.prepend_token(row, SEPARATOR);
    editor.prepend_token(row, style.prefix());

    if let Some(suffix) = style.suffix() {
        editor.append_token(row, SEPARATOR);
        editor.append_token(row, suffix);
    }
}

/// Exact inverse of [`comment_line`]. Callers must only use it on rows that
/// classify as [`Classification::Commented`].
pub fn uncomment_line<E>(editor: &mut E, row: usize, style: &CommentStyle)
where
    E: LineEditor + ?Sized,
{
    editor.strip_front(row, style.prefix_len() + 1);

    if style.suffix().is_some() {
        editor.strip_back(row, style.suffix_len() + 1);
    }
}

/// Apply the edit implied by `classification`.
pub fn apply<E>(editor: &mut E, row: usize, style: &CommentStyle, classification: Classification)
where
    E: LineEditor + ?Sized,
{
    match classification {
        Classification::NotCommented => comment_line(editor, row, style),
        Classification::Commented => uncomment_line(editor, row, style),
    }
}

/// Classify `row` and flip it. Returns the state the row had before.
pub fn toggle_line<E>(editor: &mut E, row: usize, style: &CommentStyle) -> Classification
where
    E: LineEditor + ?Sized,
{
    let before = classify(editor, row, style);
    apply(editor, row, style, before);
    before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecules::editor::TextBuffer;

    fn line_style() -> CommentStyle {
        CommentStyle::parse("//").unwrap()
    }

    fn block_style() -> CommentStyle {
        CommentStyle::parse("/* */").unwrap()
    }

    fn classify_str(line: &str, style: &CommentStyle) -> Classification {
        let buffer = TextBuffer::from_string(line);
        classify(&buffer, 1, style)
    }

    fn toggled(line: &str, style: &CommentStyle) -> String {
        let mut buffer = TextBuffer::from_string(line);
        toggle_line(&mut buffer, 1, style);
        buffer.line(1).unwrap_or_default()
    }

    // ── classify ──────────────────────────────────────────────────

    #[test]
    fn test_classify_line_comment() {
        assert_eq!(classify_str("// foo", &line_style()), Classification::Commented);
        assert_eq!(classify_str("foo", &line_style()), Classification::NotCommented);
    }

    #[test]
    fn test_classify_requires_separator_after_prefix() {
        assert_eq!(classify_str("//foo", &line_style()), Classification::NotCommented);
    }

    #[test]
    fn test_classify_is_anchored_at_column_one() {
        assert_eq!(classify_str("  // foo", &line_style()), Classification::NotCommented);
    }

    #[test]
    fn test_classify_block_comment() {
        let style = block_style();
        assert_eq!(classify_str("/* bar */", &style), Classification::Commented);
        assert_eq!(classify_str("/* bar*/", &style), Classification::NotCommented);
        assert_eq!(classify_str("/* bar", &style), Classification::NotCommented);
        assert_eq!(classify_str("bar */", &style), Classification::NotCommented);
    }

    #[test]
    fn test_classify_ignores_inner_content() {
        let style = block_style();
        assert_eq!(classify_str("/* a */ b /* c */", &style), Classification::Commented);
    }

    #[test]
    fn test_classify_empty_line() {
        assert_eq!(classify_str("", &line_style()), Classification::NotCommented);
        assert_eq!(classify_str("", &block_style()), Classification::NotCommented);
    }

    #[test]
    fn test_classify_boundary_width_prefix_only() {
        // Threshold is prefix + suffix + 2 even without a suffix.
        assert_eq!(classify_str("// x", &line_style()), Classification::Commented);
        assert_eq!(classify_str("// ", &line_style()), Classification::NotCommented);
    }

    #[test]
    fn test_classify_boundary_width_block() {
        let style = block_style();
        assert_eq!(classify_str("/*  */", &style), Classification::Commented);
        assert_eq!(classify_str("/* */", &style), Classification::NotCommented);
    }

    #[test]
    fn test_classify_wide_content() {
        assert_eq!(classify_str("// 你好", &line_style()), Classification::Commented);
        assert_eq!(classify_str("/* 你好 */", &block_style()), Classification::Commented);
    }

    #[test]
    fn test_classify_multi_glyph_suffix_order() {
        let style = CommentStyle::parse("<!-- -->").unwrap();
        assert_eq!(classify_str("<!-- note -->", &style), Classification::Commented);
        assert_eq!(classify_str("<!-- note >--", &style), Classification::NotCommented);
    }

    #[test]
    fn test_classify_wide_delimiters() {
        let style = CommentStyle::parse("「 」").unwrap();
        assert_eq!(classify_str("「 x 」", &style), Classification::Commented);
        assert_eq!(classify_str("「 x」", &style), Classification::NotCommented);
        assert_eq!(classify_str("「x 」", &style), Classification::NotCommented);

        let style = CommentStyle::parse("你").unwrap();
        assert_eq!(classify_str("你 note", &style), Classification::Commented);
        assert_eq!(classify_str("你note", &style), Classification::NotCommented);
    }

    #[test]
    fn test_wide_delimiters_round_trip() {
        for value in ["「 」", "你", "« »»"] {
            let style = CommentStyle::parse(value).unwrap();
            for content in ["x", "note", "中文"] {
                let mut buffer = TextBuffer::from_string(content);
                assert_eq!(toggle_line(&mut buffer, 1, &style), Classification::NotCommented);
                assert_eq!(classify(&buffer, 1, &style), Classification::Commented, "{value}");
                assert_eq!(toggle_line(&mut buffer, 1, &style), Classification::Commented);
                assert_eq!(buffer.to_string(), content, "{value}");
            }
        }
    }

    // ── comment / uncomment ───────────────────────────────────────

    #[test]
    fn test_comment_line_prefix_only() {
        let mut buffer = TextBuffer::from_string("foo");
        comment_line(&mut buffer, 1, &line_style());
        assert_eq!(buffer.to_string(), "// foo");
    }

    #[test]
    fn test_comment_line_with_suffix() {
        let mut buffer = TextBuffer::from_string("bar");
        comment_line(&mut buffer, 1, &block_style());
        assert_eq!(buffer.to_string(), "/* bar */");
    }

    #[test]
    fn test_uncomment_line_with_suffix() {
        let mut buffer = TextBuffer::from_string("/* bar */");
        uncomment_line(&mut buffer, 1, &block_style());
        assert_eq!(buffer.to_string(), "bar");
    }

    #[test]
    fn test_comment_then_uncomment_restores_bytes() {
        let contents = [
            "",
            " ",
            "foo",
            "  indented(x);  ",
            "// already",
            "/* nested */",
            "tab\there",
            "你好 world",
            "e\u{301}clair",
            "\u{301}abc",
            "abc\u{200d}",
            "x\u{308}",
        ];
        for style in [line_style(), block_style(), CommentStyle::parse("#").unwrap()] {
            for content in contents {
                let mut buffer = TextBuffer::from_string(content);
                comment_line(&mut buffer, 1, &style);
                // An empty line under a prefix-only style stays below the width threshold.
                if !content.is_empty() || style.suffix().is_some() {
                    assert_eq!(
                        classify(&buffer, 1, &style),
                        Classification::Commented,
                        "{content:?}"
                    );
                }
                uncomment_line(&mut buffer, 1, &style);
                assert_eq!(buffer.line(1).as_deref(), Some(content), "style {style}");
            }
        }
    }

    #[test]
    fn test_uncomment_then_comment_restores_bytes() {
        let style = block_style();
        let mut buffer = TextBuffer::from_string("/* keep  spacing */");
        uncomment_line(&mut buffer, 1, &style);
        assert_eq!(buffer.to_string(), "keep  spacing");
        comment_line(&mut buffer, 1, &style);
        assert_eq!(buffer.to_string(), "/* keep  spacing */");
    }

    // ── toggle_line ───────────────────────────────────────────────

    #[test]
    fn test_toggle_examples() {
        assert_eq!(toggled("foo", &line_style()), "// foo");
        assert_eq!(toggled("// foo", &line_style()), "foo");
        assert_eq!(toggled("bar", &block_style()), "/* bar */");
        assert_eq!(toggled("/* bar */", &block_style()), "bar");
    }

    #[test]
    fn test_toggle_empty_line_comments() {
        assert_eq!(toggled("", &line_style()), "// ");
        assert_eq!(toggled("", &block_style()), "/*  */");
    }

    #[test]
    fn test_toggle_reports_previous_state() {
        let mut buffer = TextBuffer::from_string("// foo");
        assert_eq!(
            toggle_line(&mut buffer, 1, &line_style()),
            Classification::Commented
        );
        assert_eq!(
            toggle_line(&mut buffer, 1, &line_style()),
            Classification::NotCommented
        );
        assert_eq!(buffer.to_string(), "// foo");
    }
}
