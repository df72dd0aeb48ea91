//! Translation of press-drag-release gestures into `MoveTask` commands.
//!
//! A gesture has two phases. [`DragCoordinator::start`] lifts a card and
//! remembers it as the active task; [`DragCoordinator::end`] releases it over
//! a drop target and yields at most one command. Every end path clears the
//! active task, whether or not a command comes out of it.

use std::str::FromStr;

use log::debug;

use crate::{
    error::{BoardError, Result},
    models::{Column, Task},
    store::{BoardState, Command},
};

/// Tracks the task lifted by the current gesture, if any.
#[derive(Debug, Default)]
pub struct DragCoordinator {
    active: Option<Task>,
}

impl DragCoordinator {
    /// Creates a coordinator with no gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// The task currently lifted, for floating previews.
    pub fn active(&self) -> Option<&Task> {
        self.active.as_ref()
    }

    /// True while a gesture holds a task.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a gesture on the card with `task_id`.
    ///
    /// Returns the lifted task, or `None` when no column holds that id (an
    /// invalid drag that records nothing).
    ///
    /// # Errors
    ///
    /// Returns `BoardError::GestureInProgress` if another task is still lifted;
    /// the running gesture is left untouched.
    pub fn start(&mut self, state: &BoardState, task_id: &str) -> Result<Option<&Task>> {
        if let Some(active) = &self.active {
            return Err(BoardError::GestureInProgress {
                task_id: active.id.clone(),
            });
        }

        match state.find_task(task_id) {
            Some((_, task)) => {
                self.active = Some(task.clone());
                Ok(self.active.as_ref())
            }
            None => {
                debug!("drag start: unknown task '{task_id}'");
                Ok(None)
            }
        }
    }

    /// Ends the gesture over `drop_target`, a raw column identifier.
    ///
    /// Yields a `MoveTask` command only when the target is a valid column, the
    /// task still exists on the board, and it is not already in that column.
    pub fn end(&mut self, state: &BoardState, drop_target: Option<&str>) -> Option<Command> {
        let active = self.active.take()?;

        let Some(target) = drop_target.and_then(|id| Column::from_str(id).ok()) else {
            debug!("drag end: '{}' released outside any column", active.id);
            return None;
        };

        let Some((origin, _)) = state.find_task(&active.id) else {
            debug!("drag end: '{}' vanished during the gesture", active.id);
            return None;
        };

        if origin == target {
            return None;
        }

        Some(Command::MoveTask {
            task_id: active.id,
            from: origin,
            to: target,
        })
    }

    /// Abandons the gesture without producing a command.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{Columns, Project};

    fn task(id: &str, status: Column) -> Task {
        let at = Timestamp::from_second(1_700_000_000).unwrap();
        Task {
            id: id.to_string(),
            title: id.to_string(),
            description: id.to_string(),
            role: "Backend".to_string(),
            status,
            created_at: at,
            updated_at: at,
        }
    }

    fn board() -> BoardState {
        let tasks = vec![task("backend-0", Column::Todo), task("backend-1", Column::Todo)];
        BoardState {
            current_project: Some(Project {
                description: "App".to_string(),
                generated_at: Timestamp::from_second(1_700_000_000).unwrap(),
                selected_roles: vec!["Backend".to_string()],
                tasks: tasks.clone(),
            }),
            columns: Columns::with_all_in_first(tasks),
            ..Default::default()
        }
    }

    #[test]
    fn test_drop_on_other_column_issues_move() {
        let state = board();
        let mut drag = DragCoordinator::new();

        let lifted = drag.start(&state, "backend-1").unwrap();
        assert_eq!(lifted.map(|t| t.id.as_str()), Some("backend-1"));
        assert!(drag.is_dragging());

        let command = drag.end(&state, Some("codeReview"));
        assert_eq!(
            command,
            Some(Command::MoveTask {
                task_id: "backend-1".to_string(),
                from: Column::Todo,
                to: Column::CodeReview,
            })
        );
        assert!(drag.active().is_none());
    }

    #[test]
    fn test_drop_outside_any_column_is_discarded() {
        let state = board();
        let mut drag = DragCoordinator::new();

        drag.start(&state, "backend-0").unwrap();
        assert_eq!(drag.end(&state, None), None);
        assert!(!drag.is_dragging());

        drag.start(&state, "backend-0").unwrap();
        assert_eq!(drag.end(&state, Some("card-backend-1")), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drop_on_origin_column_is_discarded() {
        let state = board();
        let mut drag = DragCoordinator::new();

        drag.start(&state, "backend-0").unwrap();
        assert_eq!(drag.end(&state, Some("todo")), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_task_vanishing_mid_gesture_is_discarded() {
        let state = board();
        let mut drag = DragCoordinator::new();

        drag.start(&state, "backend-0").unwrap();
        let reset = BoardState::initial();
        assert_eq!(drag.end(&reset, Some("done")), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_unknown_task_records_nothing() {
        let state = board();
        let mut drag = DragCoordinator::new();

        assert!(drag.start(&state, "missing").unwrap().is_none());
        assert!(!drag.is_dragging());
        assert_eq!(drag.end(&state, Some("done")), None);
    }

    #[test]
    fn test_second_gesture_is_rejected() {
        let state = board();
        let mut drag = DragCoordinator::new();

        drag.start(&state, "backend-0").unwrap();
        let err = drag.start(&state, "backend-1").unwrap_err();
        assert!(matches!(err, BoardError::GestureInProgress { ref task_id } if task_id == "backend-0"));
        assert_eq!(drag.active().map(|t| t.id.as_str()), Some("backend-0"));

        drag.cancel();
        assert!(!drag.is_dragging());
        assert!(drag.start(&state, "backend-1").unwrap().is_some());
    }
}
