//! Board state store with a single typed command channel.
//!
//! The store exclusively owns the [`BoardState`]. Consumers get a shared
//! reference through [`BoardStore::state`] and change it only by dispatching
//! a [`Command`]; every command is applied synchronously by a pure reducer
//! whose only external input is the store's [`Clock`].
//!
//! ```text
//! View ──Command──▶ BoardStore::dispatch ──▶ BoardState::reduce ──▶ BoardState
//!   ▲                                                                  │
//!   └──────────────────────────── &BoardState ─────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use taskboard_core::{
//!     clock::ManualClock,
//!     models::{Column, Project, Task},
//!     store::{BoardStore, Command},
//! };
//!
//! let clock = ManualClock::new(Timestamp::from_second(1_700_000_000).unwrap());
//! let mut store = BoardStore::with_clock(clock);
//!
//! let now = Timestamp::from_second(1_700_000_000).unwrap();
//! let task = Task {
//!     id: "backend-0".to_string(),
//!     title: "Set up DB".to_string(),
//!     description: "Set up DB".to_string(),
//!     role: "Backend".to_string(),
//!     status: Column::Todo,
//!     created_at: now,
//!     updated_at: now,
//! };
//! store.dispatch(Command::SetProject(Project {
//!     description: "Demo".to_string(),
//!     generated_at: now,
//!     selected_roles: vec!["Backend".to_string()],
//!     tasks: vec![task],
//! }));
//! store.dispatch(Command::MoveTask {
//!     task_id: "backend-0".to_string(),
//!     from: Column::Todo,
//!     to: Column::Done,
//! });
//!
//! assert!(store.state().columns.get(Column::Todo).is_empty());
//! assert_eq!(store.state().columns.get(Column::Done)[0].status, Column::Done);
//! ```

mod command;
mod generation;
mod state;


use log::debug;

pub use command::Command;
pub use generation::GenerationTicket;
pub use state::BoardState;

use crate::clock::{Clock, SystemClock};

/// Single owner and single writer of the board state.
#[derive(Debug)]
pub struct BoardStore<C: Clock = SystemClock> {
    state: BoardState,
    clock: C,
    /// Bumped by every reset and every new generation request
    epoch: u64,
}

impl BoardStore<SystemClock> {
    /// Creates a store in the initial state using wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for BoardStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BoardStore<C> {
    /// Creates a store in the initial state using the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: BoardState::initial(),
            clock,
            epoch: 0,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// The clock commands are stamped with.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Applies a command to the state.
    pub fn dispatch(&mut self, command: Command) {
        debug!("dispatch: {}", command.name());
        if matches!(command, Command::ResetProject) {
            self.epoch += 1;
        }
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(command, &self.clock);
    }
}
