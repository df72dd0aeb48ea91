//! A board store paired with the drag coordinator acting on it.

use crate::{
    clock::{Clock, SystemClock},
    drag::DragCoordinator,
    error::Result,
    models::Task,
    store::{BoardState, BoardStore, Command},
};

/// Everything one board view needs: the store it reads and dispatches to,
/// and the gesture state of its cards.
#[derive(Debug)]
pub struct BoardSession<C: Clock = SystemClock> {
    store: BoardStore<C>,
    drag: DragCoordinator,
}

impl BoardSession<SystemClock> {
    /// Creates an empty session using wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for BoardSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BoardSession<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: BoardStore::with_clock(clock),
            drag: DragCoordinator::new(),
        }
    }

    pub fn state(&self) -> &BoardState {
        self.store.state()
    }

    pub fn store(&self) -> &BoardStore<C> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BoardStore<C> {
        &mut self.store
    }

    pub fn drag(&self) -> &DragCoordinator {
        &self.drag
    }

    pub fn dispatch(&mut self, command: Command) {
        self.store.dispatch(command);
    }

    /// Lifts the card with `task_id`; see [`DragCoordinator::start`].
    pub fn begin_drag(&mut self, task_id: &str) -> Result<Option<&Task>> {
        self.drag.start(self.store.state(), task_id)
    }

    /// Releases the lifted card over `drop_target` and dispatches the
    /// resulting move, if any. Returns whether a command was dispatched.
    pub fn end_drag(&mut self, drop_target: Option<&str>) -> bool {
        match self.drag.end(self.store.state(), drop_target) {
            Some(command) => {
                self.store.dispatch(command);
                true
            }
            None => false,
        }
    }

    /// Drops the lifted card without moving it.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }
}
