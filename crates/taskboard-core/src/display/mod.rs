//! Markdown formatting for the board and for operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types add context that a single model does not carry:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Board & Result  │    │   Formatted     │
//! │  (Task, ...)    │───▶│    Wrappers     │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`board`]: the whole board ([`Board`])
//! - [`results`]: handler outcomes ([`GenerateResult`], [`MoveOutcome`],
//!   [`ExportResult`])
//! - [`status`]: success/failure lines ([`OperationStatus`])
//! - [`models`]: Display implementations for domain models
//!
//! All output is markdown, rendered by the CLI's terminal skin or passed to
//! MCP clients as text.

pub mod board;
pub mod models;
pub mod results;
pub mod status;

pub use board::Board;
pub use models::LocalTime;
pub use results::{ExportResult, GenerateResult, MoveOutcome};
pub use status::OperationStatus;
