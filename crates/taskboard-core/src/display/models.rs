//! Display implementations for domain models.
//!
//! Every implementation writes markdown so the same text renders in a
//! terminal skin or goes out verbatim over MCP.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::models::{BoardFilter, BoardSummary, Column, Project, Task};

/// Formats a timestamp in the system time zone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** {} _({})_", self.id, self.title, self.role)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.description)?;
        writeln!(f)?;
        writeln!(f, "- Generated: {}", LocalTime(&self.generated_at))?;
        if self.selected_roles.is_empty() {
            writeln!(f, "- Roles: none")?;
        } else {
            writeln!(f, "- Roles: {}", self.selected_roles.join(", "))?;
        }
        writeln!(f, "- Tasks: {}", self.tasks.len())
    }
}

impl fmt::Display for BoardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} roles, {} tasks ({}% done)",
            self.total_roles,
            self.total_tasks,
            self.completion_percent()
        )
    }
}

impl fmt::Display for BoardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let search = self.search.trim();
        match (search.is_empty(), self.roles.is_empty()) {
            (true, true) => write!(f, "no filters"),
            (false, true) => write!(f, "search \"{search}\""),
            (true, false) => write!(f, "roles {}", self.roles.join(", ")),
            (false, false) => write!(f, "search \"{search}\"; roles {}", self.roles.join(", ")),
        }
    }
}
