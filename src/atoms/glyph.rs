use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a single glyph. Zero-width glyphs such as control
/// characters or a lone combining mark still occupy one cell.
pub fn glyph_width(glyph: &str) -> usize {
    glyph.width().max(1)
}

/// Display width of `text` laid out glyph by glyph.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(glyph_width).sum()
}
