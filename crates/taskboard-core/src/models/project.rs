//! Project model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Task;

/// One generation session: the source description and the tasks it produced.
///
/// A project is only ever replaced as a whole; `tasks` keeps the initial list
/// in generation order while the board tracks where each task currently is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Trimmed description the tasks were generated from
    pub description: String,

    /// Timestamp shared by every task of the batch (UTC)
    pub generated_at: Timestamp,

    /// Role labels in the order the generator selected them
    pub selected_roles: Vec<String>,

    /// Full initial task list
    pub tasks: Vec<Task>,
}
