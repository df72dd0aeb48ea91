//! Typed command channel of the board store.

use crate::models::{Column, FilterUpdate, Project};

/// Every state change the board accepts.
///
/// Views never touch [`BoardState`](super::BoardState) directly; they build one
/// of these and hand it to [`BoardStore::dispatch`](super::BoardStore::dispatch).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Toggle the loading indicator
    SetLoading(bool),

    /// Set or clear the user-visible error message
    SetError(Option<String>),

    /// Replace the project and put all of its tasks in the first column
    SetProject(Project),

    /// Move a task between columns, appending it to the target
    MoveTask {
        task_id: String,
        from: Column,
        to: Column,
    },

    /// Shallow-merge the given keys into the filters
    SetFilter(FilterUpdate),

    /// Return to the initial empty state
    ResetProject,
}

impl Command {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetLoading(_) => "set_loading",
            Command::SetError(_) => "set_error",
            Command::SetProject(_) => "set_project",
            Command::MoveTask { .. } => "move_task",
            Command::SetFilter(_) => "set_filter",
            Command::ResetProject => "reset_project",
        }
    }
}
