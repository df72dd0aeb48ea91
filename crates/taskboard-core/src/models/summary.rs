//! Board summary model with per-column counts.

use serde::{Deserialize, Serialize};

use super::{Column, Columns, Project};

/// Aggregate numbers for a loaded project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    /// Number of roles the generator selected
    pub total_roles: usize,

    /// Number of tasks on the board
    pub total_tasks: usize,

    pub todo: usize,
    pub in_progress: usize,
    pub code_review: usize,
    pub done: usize,
}

impl BoardSummary {
    /// Builds the summary from a project and its current column partition.
    pub fn new(project: &Project, columns: &Columns) -> Self {
        Self {
            total_roles: project.selected_roles.len(),
            total_tasks: columns.len(),
            todo: columns.get(Column::Todo).len(),
            in_progress: columns.get(Column::InProgress).len(),
            code_review: columns.get(Column::CodeReview).len(),
            done: columns.get(Column::Done).len(),
        }
    }

    /// Count for a single column.
    pub fn count(&self, column: Column) -> usize {
        match column {
            Column::Todo => self.todo,
            Column::InProgress => self.in_progress,
            Column::CodeReview => self.code_review,
            Column::Done => self.done,
        }
    }

    /// Share of tasks that reached `done`, in whole percent.
    pub fn completion_percent(&self) -> usize {
        if self.total_tasks == 0 {
            0
        } else {
            self.done * 100 / self.total_tasks
        }
    }
}
