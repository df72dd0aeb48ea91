//! Column enumeration for the fixed board layout.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of board columns.
///
/// The declaration order is load-bearing: it is the on-screen order, the
/// export order, and the first variant is where new projects place every task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum Column {
    /// Task has not been started
    Todo,

    /// Task is being worked on
    InProgress,

    /// Task is waiting for review
    CodeReview,

    /// Task has been completed
    Done,
}

impl Column {
    /// Every column in board order.
    pub const ALL: [Column; 4] = [
        Column::Todo,
        Column::InProgress,
        Column::CodeReview,
        Column::Done,
    ];

    /// The column that receives all tasks of a freshly loaded project.
    pub fn first() -> Self {
        Column::Todo
    }

    /// Canonical identifier used on the wire and in drop targets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Todo => "todo",
            Column::InProgress => "inProgress",
            Column::CodeReview => "codeReview",
            Column::Done => "done",
        }
    }

    /// Position of the column in board order.
    pub fn index(&self) -> usize {
        match self {
            Column::Todo => 0,
            Column::InProgress => 1,
            Column::CodeReview => 2,
            Column::Done => 3,
        }
    }

    /// Get the column heading with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskboard_core::models::Column;
    ///
    /// assert_eq!(Column::Todo.with_icon(), "○ To Do");
    /// assert_eq!(Column::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(Column::CodeReview.with_icon(), "◎ Code Review");
    /// assert_eq!(Column::Done.with_icon(), "✓ Done");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Column::Todo => "○ To Do",
            Column::InProgress => "➤ In Progress",
            Column::CodeReview => "◎ Code Review",
            Column::Done => "✓ Done",
        }
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" | "to-do" | "to_do" => Ok(Column::Todo),
            "inprogress" | "in_progress" | "in-progress" => Ok(Column::InProgress),
            "codereview" | "code_review" | "code-review" | "review" => Ok(Column::CodeReview),
            "done" => Ok(Column::Done),
            _ => Err(format!("Invalid column: {s}")),
        }
    }
}
