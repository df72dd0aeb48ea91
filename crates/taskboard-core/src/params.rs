//! Parameter structures for board operations
//!
//! These structures are shared by every interface (interactive session, MCP
//! tools, one-shot commands) and carry no framework-specific derives apart
//! from serde and the optional schema derive. Interface layers wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schemas for the MCP layer are derived only when the `schema` feature
//! is enabled.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::FilterUpdate;

/// Parameters for generating a new project breakdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateProject {
    /// Free-text description of the project to break down into tasks
    pub description: String,
}

/// Parameters for moving a task to another column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveTask {
    /// ID of the task to move (for example 'backend-developer-0')
    pub task_id: String,
    /// Target column: 'todo', 'inProgress', 'codeReview' or 'done'
    pub to: String,
}

/// Parameters for narrowing the visible board.
///
/// Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetFilter {
    /// Case-insensitive search term; an empty string clears it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Role labels to show; an empty list shows every role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl From<&SetFilter> for FilterUpdate {
    fn from(params: &SetFilter) -> Self {
        FilterUpdate {
            search: params.search.clone(),
            roles: params.roles.as_ref().map(|roles| {
                roles
                    .iter()
                    .map(|r| r.trim().to_string())
                    .filter(|r| !r.is_empty())
                    .collect()
            }),
        }
    }
}

/// Parameters for exporting the board to a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ExportBoard {
    /// Destination file. Defaults to a name derived from the project
    /// description under the XDG data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
