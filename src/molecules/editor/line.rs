use unicode_segmentation::UnicodeSegmentation;

use crate::atoms::glyph::glyph_width;

/// One buffer line stored as glyph cells.
///
/// Text is segmented into grapheme clusters once, when the line is built.
/// Later edits insert and remove whole cells, so an inserted glyph never
/// fuses with a neighbouring combining mark or joiner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    cells: Vec<String>,
}

impl Line {
    pub fn from_text(text: &str) -> Self {
        Self {
            cells: text.graphemes(true).map(String::from).collect(),
        }
    }

    pub fn text(&self) -> String {
        self.cells.concat()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|c| glyph_width(c)).sum()
    }

    /// Index of the cell covering display column `col` (1-based).
    pub fn cell_at_col(&self, col: usize) -> Option<usize> {
        if col == 0 {
            return None;
        }
        let mut start_col = 1;
        for (i, cell) in self.cells.iter().enumerate() {
            let width = glyph_width(cell);
            if col < start_col + width {
                return Some(i);
            }
            start_col += width;
        }
        None
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|s| s.as_str())
    }

    pub fn insert(&mut self, index: usize, glyph: &str) {
        let index = index.min(self.cells.len());
        self.cells.insert(index, glyph.to_string());
    }

    pub fn push(&mut self, glyph: &str) {
        self.cells.push(glyph.to_string());
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.cells.len() {
            self.cells.remove(index);
        }
    }

    pub fn pop(&mut self) {
        self.cells.pop();
    }
}
