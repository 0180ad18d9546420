use std::collections::BTreeSet;

use thiserror::Error;

use super::Classification;

/// Failure kinds of the `comment-toggle` command. Every variant is a
/// user-facing condition; the `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("expected 0 arguments but got {0}")]
    MalformedArguments(usize),
    #[error("no active frame")]
    NoActiveFrame,
    #[error("active frame has no buffer")]
    NoBuffer,
    #[error("Comment style unknown for {filetype}")]
    StyleUnknown { filetype: String },
}

/// What happened to a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowChange {
    pub row: usize,
    /// State of the row before the toggle.
    pub before: Classification,
}

impl RowChange {
    pub fn was_commented(&self) -> bool {
        self.before == Classification::NotCommented
    }

    pub fn was_uncommented(&self) -> bool {
        self.before == Classification::Commented
    }
}

/// Rows touched by a successful toggle, in the order they were edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub changes: Vec<RowChange>,
}

impl ToggleOutcome {
    pub fn record(&mut self, row: usize, before: Classification) {
        self.changes.push(RowChange { row, before });
    }

    pub fn rows(&self) -> BTreeSet<usize> {
        self.changes.iter().map(|c| c.row).collect()
    }

    pub fn commented_count(&self) -> usize {
        self.changes.iter().filter(|c| c.was_commented()).count()
    }

    pub fn uncommented_count(&self) -> usize {
        self.changes.iter().filter(|c| c.was_uncommented()).count()
    }
}
