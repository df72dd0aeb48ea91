//! Outcomes returned by the handlers, with their confirmation messages.

use std::{fmt, path::PathBuf};

use crate::models::{BoardSummary, Column};

/// A freshly generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    pub summary: BoardSummary,
}

impl fmt::Display for GenerateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generated {} tasks across {} roles",
            self.summary.total_tasks, self.summary.total_roles
        )
    }
}

/// What a move request did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        task_id: String,
        from: Column,
        to: Column,
    },
    /// The task already sat in the requested column
    Unchanged { task_id: String, column: Column },
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Moved { task_id, from, to } => writeln!(
                f,
                "Moved {task_id} from {} to {}",
                from.with_icon(),
                to.with_icon()
            ),
            MoveOutcome::Unchanged { task_id, column } => {
                writeln!(f, "{task_id} is already in {}", column.with_icon())
            }
        }
    }
}

/// Location of a written export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub path: PathBuf,
}

impl fmt::Display for ExportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board exported to {}", self.path.display())
    }
}
