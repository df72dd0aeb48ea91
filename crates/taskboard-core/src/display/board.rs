//! Full board rendering.

use std::fmt;

use crate::{models::Column, store::BoardState};

/// Wrapper that renders the whole board as markdown: project header, status
/// lines, active filter, then every column in board order with the tasks that
/// pass the filter.
///
/// # Examples
///
/// ```rust
/// use taskboard_core::{display::Board, store::BoardState};
///
/// let state = BoardState::initial();
/// assert!(Board(&state).to_string().contains("No project loaded"));
/// ```
pub struct Board<'a>(pub &'a BoardState);

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        if state.loading {
            writeln!(f, "_Generating tasks..._")?;
            writeln!(f)?;
        }
        if let Some(error) = &state.error {
            writeln!(f, "> Error: {error}")?;
            writeln!(f)?;
        }

        let Some(project) = &state.current_project else {
            return writeln!(f, "No project loaded.");
        };

        write!(f, "{project}")?;
        if let Some(summary) = state.summary() {
            writeln!(f, "- Progress: {summary}")?;
        }
        writeln!(f)?;
        if !state.filters.is_empty() {
            writeln!(f, "_Filtered by {}_", state.filters)?;
            writeln!(f)?;
        }

        for column in Column::ALL {
            let total = state.columns.get(column).len();
            let visible = state.visible(column);
            if visible.len() == total {
                writeln!(f, "## {} ({total})", column.with_icon())?;
            } else {
                writeln!(f, "## {} ({} of {total})", column.with_icon(), visible.len())?;
            }
            writeln!(f)?;
            if visible.is_empty() {
                writeln!(f, "_No tasks_")?;
            } else {
                for task in visible {
                    write!(f, "{task}")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
