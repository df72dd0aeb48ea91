//! Filter types for narrowing the visible board.

use serde::{Deserialize, Serialize};

use super::Task;

/// Filter applied when rendering the board.
///
/// Filtering only affects what is shown; the column partition is untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardFilter {
    /// Case-insensitive search term matched against title, description and
    /// role. Empty matches everything.
    pub search: String,

    /// Role labels to show. Empty shows every role.
    pub roles: Vec<String>,
}

impl BoardFilter {
    /// Returns true when the filter hides nothing.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.roles.is_empty()
    }

    /// Checks a task against both the search term and the role subset.
    pub fn matches(&self, task: &Task) -> bool {
        let role_ok = self.roles.is_empty() || self.roles.iter().any(|r| r == &task.role);
        role_ok && task.matches_search(&self.search.trim().to_lowercase())
    }

    /// Shallow-merges an update: only the keys it carries are replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taskboard_core::models::{BoardFilter, FilterUpdate};
    ///
    /// let mut filter = BoardFilter {
    ///     search: "auth".to_string(),
    ///     roles: vec!["Backend Developer".to_string()],
    /// };
    /// filter.merge(FilterUpdate {
    ///     search: Some("db".to_string()),
    ///     roles: None,
    /// });
    /// assert_eq!(filter.search, "db");
    /// assert_eq!(filter.roles, vec!["Backend Developer".to_string()]);
    /// ```
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(roles) = update.roles {
            self.roles = roles;
        }
    }
}

/// Partial filter update carried by `SetFilter`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub roles: Option<Vec<String>>,
}
