use super::host::{EditBuffer, LineEditor};
use super::line::Line;
use super::selection::Selection;

const MAX_UNDO_LEVELS: usize = 50;

pub const DEFAULT_FILETYPE: &str = "unknown";

#[derive(Debug, Clone)]
struct BufferSnapshot {
    lines: Vec<Line>,
    cursor_row: usize,
    cursor_col: usize,
}

#[derive(Debug, Clone, Default)]
struct UndoHistory {
    undo_stack: Vec<BufferSnapshot>,
    redo_stack: Vec<BufferSnapshot>,
    /// State captured when the currently open undo unit began.
    pending: Option<BufferSnapshot>,
}

/// Line-oriented text buffer with 1-based rows and columns.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<Line>,
    cursor_row: usize,
    cursor_col: usize,
    selection: Option<Selection>,
    filetype: String,
    history: UndoHistory,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![Line::default()],
            cursor_row: 1,
            cursor_col: 1,
            selection: None,
            filetype: DEFAULT_FILETYPE.to_string(),
            history: UndoHistory::default(),
        }
    }

    pub fn from_string(content: &str) -> Self {
        Self::from_lines(content.split('\n'))
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines: Vec<Line> = lines
            .into_iter()
            .map(|l| Line::from_text(l.as_ref()))
            .collect();
        if lines.is_empty() {
            lines.push(Line::default());
        }
        Self {
            lines,
            ..Self::new()
        }
    }

    pub fn with_filetype(mut self, filetype: &str) -> Self {
        self.set_filetype(filetype);
        self
    }

    pub fn set_filetype(&mut self, filetype: &str) {
        self.filetype = filetype.to_string();
    }

    pub fn to_string(&self) -> String {
        self.lines().join("\n")
    }

    /// Text of every line, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }

    pub fn line(&self, row: usize) -> Option<String> {
        self.line_cells(row).map(Line::text)
    }

    fn line_cells(&self, row: usize) -> Option<&Line> {
        row.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    fn line_mut(&mut self, row: usize) -> Option<&mut Line> {
        row.checked_sub(1).and_then(|i| self.lines.get_mut(i))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn cursor_position(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Move the cursor, clamping to the buffer. The column may sit one past
    /// the end of the line.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor_row = row.clamp(1, self.lines.len());
        let max_col = self.visual_width(self.cursor_row) + 1;
        self.cursor_col = col.clamp(1, max_col);
    }

    pub fn select(&mut self, anchor: (usize, usize), head: (usize, usize)) {
        self.selection = Some(Selection::new(anchor, head));
    }

    pub fn current_selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot {
            lines: self.lines.clone(),
            cursor_row: self.cursor_row,
            cursor_col: self.cursor_col,
        }
    }

    fn restore(&mut self, snapshot: BufferSnapshot) {
        self.lines = snapshot.lines;
        self.cursor_row = snapshot.cursor_row;
        self.cursor_col = snapshot.cursor_col;
    }

    fn push_undo(&mut self, snapshot: BufferSnapshot) {
        self.history.undo_stack.push(snapshot);
        if self.history.undo_stack.len() > MAX_UNDO_LEVELS {
            self.history.undo_stack.remove(0);
        }
        self.history.redo_stack.clear();
    }

    pub fn has_open_undo_unit(&self) -> bool {
        self.history.pending.is_some()
    }

    /// Undo the last change, returning true if successful.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.history.undo_stack.pop() {
            let current = self.snapshot();
            self.history.redo_stack.push(current);
            self.restore(snapshot);
            true
        } else {
            false
        }
    }

    /// Redo the last undone change, returning true if successful.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.history.redo_stack.pop() {
            let current = self.snapshot();
            self.history.undo_stack.push(current);
            self.restore(snapshot);
            true
        } else {
            false
        }
    }
}

impl LineEditor for TextBuffer {
    fn glyph_at(&self, row: usize, col: usize) -> Option<&str> {
        let line = self.line_cells(row)?;
        line.cell_at_col(col).and_then(|i| line.cell(i))
    }

    fn visual_width(&self, row: usize) -> usize {
        self.line_cells(row).map(Line::width).unwrap_or(0)
    }

    fn insert_at(&mut self, row: usize, col: usize, glyph: &str) {
        if let Some(line) = self.line_mut(row) {
            let index = line.cell_at_col(col).unwrap_or(line.len());
            line.insert(index, glyph);
        }
    }

    fn append(&mut self, row: usize, glyph: &str) {
        if let Some(line) = self.line_mut(row) {
            line.push(glyph);
        }
    }

    fn delete_at(&mut self, row: usize, col: usize) {
        if let Some(line) = self.line_mut(row)
            && let Some(index) = line.cell_at_col(col)
        {
            line.remove(index);
        }
    }

    fn pop_last(&mut self, row: usize) {
        if let Some(line) = self.line_mut(row) {
            line.pop();
        }
    }
}

impl EditBuffer for TextBuffer {
    fn filetype_name(&self) -> &str {
        &self.filetype
    }

    fn selection(&self) -> Option<(usize, usize, usize, usize)> {
        self.selection.map(|s| {
            let (r1, c1) = s.anchor();
            let (r2, c2) = s.head();
            (r1, c1, r2, c2)
        })
    }

    fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn begin_undo_unit(&mut self) {
        if self.history.pending.is_none() {
            self.history.pending = Some(self.snapshot());
        }
    }

    fn commit_undo_unit(&mut self) {
        if let Some(snapshot) = self.history.pending.take()
            && snapshot.lines != self.lines
        {
            self.push_undo(snapshot);
        }
    }

    fn abort_undo_unit(&mut self) {
        if let Some(snapshot) = self.history.pending.take() {
            self.restore(snapshot);
        }
    }

    fn cursor(&self) -> (usize, usize) {
        self.cursor_position()
    }

    fn set_cursor(&mut self, row: usize, col: usize) {
        TextBuffer::set_cursor(self, row, col);
    }
}
