//! Data models for projects, tasks and the board layout.
//!
//! This module contains the core domain models of the task board. Display
//! implementations for these models are located in [`crate::display::models`]
//! to keep data structures and presentation logic apart.
//!
//! ## Model Overview
//!
//! - [`Column`]: the fixed, ordered set of board columns
//! - [`Task`]: one unit of work, always sitting in exactly one column
//! - [`Project`]: one generation session with its initial task list
//! - [`Columns`]: the partition of a project's tasks across the columns
//! - [`BoardFilter`] / [`FilterUpdate`]: search term and role subset
//! - [`BoardSummary`]: per-column counts for display and export
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use taskboard_core::models::{Column, Columns, Task};
//!
//! let now = Timestamp::now();
//! let task = Task {
//!     id: "backend-0".to_string(),
//!     title: "Set up DB".to_string(),
//!     description: "Set up DB".to_string(),
//!     role: "Backend".to_string(),
//!     status: Column::Todo,
//!     created_at: now,
//!     updated_at: now,
//! };
//!
//! let columns = Columns::with_all_in_first(vec![task]);
//! assert_eq!(columns.get(Column::Todo).len(), 1);
//! assert!(columns.get(Column::Done).is_empty());
//! assert_eq!(columns.locate("backend-0").map(|(c, _)| c), Some(Column::Todo));
//! ```

pub mod column;
pub mod columns;
pub mod filters;
pub mod project;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

pub use column::Column;
pub use columns::Columns;
pub use filters::{BoardFilter, FilterUpdate};
pub use project::Project;
pub use summary::BoardSummary;
pub use task::Task;
