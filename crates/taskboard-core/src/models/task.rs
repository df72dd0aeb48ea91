//! Task model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Column;

/// Represents one unit of work on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier, unique within a project
    pub id: String,

    /// Short title shown on the card
    pub title: String,

    /// Full task text
    pub description: String,

    /// Free-text role label the task belongs to
    pub role: String,

    /// Column the task currently sits in
    pub status: Column,

    /// Timestamp when the task was generated (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last status change (UTC)
    pub updated_at: Timestamp,
}

impl Task {
    /// Case-insensitive match of `needle` against title, description and role.
    ///
    /// `needle` is expected to be lowercased already.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.role.to_lowercase().contains(needle)
    }
}
