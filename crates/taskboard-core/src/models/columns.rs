//! Partition of a project's tasks into the four board columns.

use serde::{Deserialize, Serialize};

use super::{Column, Task};

/// Ordered task sequences, one per column.
///
/// A task id appears in at most one sequence. The store keeps the union of all
/// sequences equal to the loaded project's task set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Columns {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub code_review: Vec<Task>,
    pub done: Vec<Task>,
}

impl Columns {
    /// Places every task in the first column, preserving order.
    pub fn with_all_in_first(tasks: Vec<Task>) -> Self {
        Self {
            todo: tasks,
            ..Default::default()
        }
    }

    /// Tasks of a single column in board order.
    pub fn get(&self, column: Column) -> &[Task] {
        match column {
            Column::Todo => &self.todo,
            Column::InProgress => &self.in_progress,
            Column::CodeReview => &self.code_review,
            Column::Done => &self.done,
        }
    }

    pub(crate) fn get_mut(&mut self, column: Column) -> &mut Vec<Task> {
        match column {
            Column::Todo => &mut self.todo,
            Column::InProgress => &mut self.in_progress,
            Column::CodeReview => &mut self.code_review,
            Column::Done => &mut self.done,
        }
    }

    /// Iterates `(column, tasks)` pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &[Task])> {
        Column::ALL.into_iter().map(move |column| (column, self.get(column)))
    }

    /// All tasks flattened in column order: todo, inProgress, codeReview, done.
    pub fn flatten(&self) -> impl Iterator<Item = &Task> {
        Column::ALL
            .into_iter()
            .flat_map(move |column| self.get(column).iter())
    }

    /// Locates a task by scanning every column.
    pub fn locate(&self, task_id: &str) -> Option<(Column, &Task)> {
        self.iter().find_map(|(column, tasks)| {
            tasks
                .iter()
                .find(|task| task.id == task_id)
                .map(|task| (column, task))
        })
    }

    /// Position of a task inside a specific column.
    pub fn position_in(&self, column: Column, task_id: &str) -> Option<usize> {
        self.get(column).iter().position(|task| task.id == task_id)
    }

    /// Total number of tasks across all columns.
    pub fn len(&self) -> usize {
        Column::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    /// True when every column is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
