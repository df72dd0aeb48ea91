//! Core library for the Taskboard project breakdown board.
//!
//! A project description goes to a remote task generator; the returned roles
//! and tasks are loaded onto a four-column kanban board where tasks move from
//! `todo` through `inProgress` and `codeReview` to `done`.
//!
//! # Architecture
//!
//! - [`store`]: the single owner of the board state. Every change is a typed
//!   [`Command`] applied by a pure reducer.
//! - [`drag`]: turns press-drag-release gestures into `MoveTask` commands.
//! - [`generator`] and [`ingest`]: the remote generator contract and the
//!   mapping from its response to a [`Project`].
//! - [`handlers`]: operations shared by the CLI session and the MCP server,
//!   taking [`params`] and returning values formatted by [`display`].
//! - [`export`]: JSON snapshot of the board.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use taskboard_core::{
//!     display::Board,
//!     generator::{GeneratorConfig, HttpTaskGenerator},
//!     handlers::handle_generate,
//!     params::GenerateProject,
//!     session::BoardSession,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = HttpTaskGenerator::new(GeneratorConfig::default())?;
//! let mut session = BoardSession::new();
//!
//! let result = handle_generate(
//!     &mut session,
//!     &generator,
//!     &GenerateProject {
//!         description: "A real-time chat application".to_string(),
//!     },
//! )
//! .await?;
//! println!("{result}");
//! println!("{}", Board(session.state()));
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod display;
pub mod drag;
pub mod error;
pub mod export;
pub mod generator;
pub mod handlers;
pub mod ingest;
pub mod models;
pub mod params;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use display::{Board, ExportResult, GenerateResult, MoveOutcome, OperationStatus};
pub use drag::DragCoordinator;
pub use error::{BoardError, Result};
pub use export::BoardExport;
pub use generator::{GeneratorConfig, GeneratorConfigBuilder, HttpTaskGenerator, TaskGenerator};
pub use models::{BoardFilter, BoardSummary, Column, Columns, FilterUpdate, Project, Task};
pub use session::BoardSession;
pub use store::{BoardState, BoardStore, Command, GenerationTicket};
