//! Capabilities the comment toggle consumes from the editor hosting it.
//!
//! Rows and columns are 1-based throughout. Columns are display columns:
//! a wide glyph spans several columns, and any column inside it addresses
//! that glyph.

use unicode_segmentation::UnicodeSegmentation;

/// Glyph-level editing primitives for the lines of a buffer.
///
/// Implementors only provide the primitives; the token helpers are built on
/// top of them so every edit stays visible to the host's undo and redraw
/// machinery.
pub trait LineEditor {
    /// Glyph covering `col` on `row`, or `None` past the end of the line.
    fn glyph_at(&self, row: usize, col: usize) -> Option<&str>;

    /// Display width of `row`.
    fn visual_width(&self, row: usize) -> usize;

    /// Insert `glyph` before the glyph covering `col`. Past the end appends.
    fn insert_at(&mut self, row: usize, col: usize, glyph: &str);

    fn append(&mut self, row: usize, glyph: &str);

    /// Remove the glyph covering `col`; no-op past the end.
    fn delete_at(&mut self, row: usize, col: usize);

    /// Remove the last glyph; no-op on an empty line.
    fn pop_last(&mut self, row: usize);

    /// Put `token` at the start of `row`, keeping its glyph order.
    fn prepend_token(&mut self, row: usize, token: &str) {
        for glyph in token.graphemes(true).rev() {
            self.insert_at(row, 1, glyph);
        }
    }

    fn append_token(&mut self, row: usize, token: &str) {
        for glyph in token.graphemes(true) {
            self.append(row, glyph);
        }
    }

    /// Remove `count` glyphs from the start of `row`.
    fn strip_front(&mut self, row: usize, count: usize) {
        for _ in 0..count {
            self.delete_at(row, 1);
        }
    }

    /// Remove `count` glyphs from the end of `row`.
    fn strip_back(&mut self, row: usize, count: usize) {
        for _ in 0..count {
            self.pop_last(row);
        }
    }
}

/// A buffer as seen by a buffer-wide command.
pub trait EditBuffer: LineEditor {
    fn filetype_name(&self) -> &str;

    /// Selection as `(row1, col1, row2, col2)` in the order it was made.
    fn selection(&self) -> Option<(usize, usize, usize, usize)>;

    fn clear_selection(&mut self);

    /// Start grouping edits into one undoable step.
    fn begin_undo_unit(&mut self);

    /// Close the open unit so it can be undone as one step.
    fn commit_undo_unit(&mut self);

    /// Roll the buffer back to where the open unit started and drop it.
    fn abort_undo_unit(&mut self);

    fn cursor(&self) -> (usize, usize);

    fn set_cursor(&mut self, row: usize, col: usize);
}

/// The editing surface (frame, window, pane) a command runs against.
pub trait EditSurface {
    type Buffer: EditBuffer;

    fn backing_content(&mut self) -> Option<&mut Self::Buffer>;
}
