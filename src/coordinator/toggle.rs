use crate::molecules::editor::selection::sorted_points;
use crate::molecules::editor::{EditBuffer, EditSurface, StyleResolver, VarStore, toggle_line};
use crate::types::{ToggleError, ToggleOutcome};

/// Runs one comment toggle over the cursor row or the active selection.
pub struct ToggleController<'a, V: VarStore + ?Sized> {
    resolver: StyleResolver<'a, V>,
}

impl<'a, V: VarStore + ?Sized> ToggleController<'a, V> {
    pub fn new(vars: &'a V) -> Self {
        Self {
            resolver: StyleResolver::new(vars),
        }
    }

    /// Toggle every selected row (or the cursor row) as one undo unit.
    ///
    /// Each row is classified on its own, so a selection mixing commented and
    /// plain rows flips every row individually. If the filetype has no comment
    /// style the unit is rolled back and nothing is edited.
    pub fn toggle<S>(&self, surface: Option<&mut S>) -> Result<ToggleOutcome, ToggleError>
    where
        S: EditSurface + ?Sized,
    {
        let surface = surface.ok_or(ToggleError::NoActiveFrame)?;
        let buffer = surface.backing_content().ok_or(ToggleError::NoBuffer)?;

        buffer.begin_undo_unit();

        // Insertions shift columns, so park the cursor at column 1 while editing.
        let (cursor_row, saved_col) = buffer.cursor();
        buffer.set_cursor(cursor_row, 1);

        let Some(style) = self.resolver.resolve(buffer.filetype_name()) else {
            let filetype = buffer.filetype_name().to_string();
            buffer.set_cursor(cursor_row, saved_col);
            buffer.abort_undo_unit();
            tracing::warn!(filetype = %filetype, "no comment style configured");
            return Err(ToggleError::StyleUnknown { filetype });
        };

        let mut outcome = ToggleOutcome::default();
        match buffer.selection() {
            Some(points) => {
                let (first, _, last, _) = sorted_points(points);
                for row in first..=last {
                    let before = toggle_line(&mut *buffer, row, &style);
                    outcome.record(row, before);
                }
                buffer.clear_selection();
            }
            None => {
                let before = toggle_line(&mut *buffer, cursor_row, &style);
                outcome.record(cursor_row, before);
            }
        }

        buffer.set_cursor(cursor_row, saved_col);
        buffer.commit_undo_unit();

        tracing::debug!(
            style = %style,
            commented = outcome.commented_count(),
            uncommented = outcome.uncommented_count(),
            "toggled comments"
        );
        Ok(outcome)
    }
}
