//! Board state and the reducer that drives it.

use jiff::{SignedDuration, Timestamp};
use log::debug;
use serde::Serialize;

use super::Command;
use crate::{
    clock::Clock,
    models::{BoardFilter, BoardSummary, Column, Columns, Project, Task},
};

/// Canonical project and task state of the board.
///
/// The default value is the initial state: no project, every column empty,
/// not loading, no error and no filters.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub current_project: Option<Project>,
    pub columns: Columns,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: BoardFilter,
}

impl BoardState {
    /// The documented initial state.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Applies one command and returns the next state.
    ///
    /// The clock is only read by `MoveTask`, and at most once.
    pub fn reduce<C: Clock>(self, command: Command, clock: &C) -> Self {
        match command {
            Command::SetLoading(loading) => Self { loading, ..self },
            Command::SetError(error) => Self { error, ..self },
            Command::SetProject(project) => Self {
                columns: Columns::with_all_in_first(project.tasks.clone()),
                current_project: Some(project),
                ..self
            },
            Command::MoveTask { task_id, from, to } => self.move_task(&task_id, from, to, clock),
            Command::SetFilter(update) => {
                let mut next = self;
                next.filters.merge(update);
                next
            }
            Command::ResetProject => Self::initial(),
        }
    }

    fn move_task<C: Clock>(mut self, task_id: &str, from: Column, to: Column, clock: &C) -> Self {
        let Some(index) = self.columns.position_in(from, task_id) else {
            debug!("move_task: '{task_id}' is not in {}, ignoring", from.as_str());
            return self;
        };
        if from == to {
            return self;
        }

        let mut task = self.columns.get_mut(from).remove(index);
        task.status = to;
        task.updated_at = advance_stamp(task.updated_at, clock.now());
        self.columns.get_mut(to).push(task);
        self
    }

    /// Tasks of a column that pass the current filters, in column order.
    pub fn visible(&self, column: Column) -> Vec<&Task> {
        self.columns
            .get(column)
            .iter()
            .filter(|task| self.filters.matches(task))
            .collect()
    }

    /// Finds a task and the column holding it.
    pub fn find_task(&self, task_id: &str) -> Option<(Column, &Task)> {
        self.columns.locate(task_id)
    }

    /// Per-column counts, when a project is loaded.
    pub fn summary(&self) -> Option<BoardSummary> {
        self.current_project
            .as_ref()
            .map(|project| BoardSummary::new(project, &self.columns))
    }

    /// True when no project has been loaded since start or the last reset.
    pub fn is_empty(&self) -> bool {
        self.current_project.is_none()
    }
}

/// Next `updatedAt` for a status change: the clock reading, or one nanosecond
/// past the previous stamp when the clock has not moved beyond it.
fn advance_stamp(previous: Timestamp, now: Timestamp) -> Timestamp {
    if now > previous {
        now
    } else {
        previous
            .checked_add(SignedDuration::from_nanos(1))
            .unwrap_or(previous)
    }
}
