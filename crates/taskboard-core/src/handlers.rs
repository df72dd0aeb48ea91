//! Board operations shared by every interface.
//!
//! The interactive session, the one-shot `generate` command and the MCP
//! server all call these functions and only differ in how they format the
//! returned values:
//!
//! ```text
//! Interface → Handler → BoardSession (store + drag) → Models
//! ```
//!
//! # Examples
//!
//! ```rust
//! use taskboard_core::{
//!     handlers::{handle_move_task, handle_reset},
//!     params::MoveTask,
//!     session::BoardSession,
//!     BoardError,
//! };
//!
//! let mut session = BoardSession::new();
//! let err = handle_move_task(
//!     &mut session,
//!     &MoveTask {
//!         task_id: "backend-0".to_string(),
//!         to: "done".to_string(),
//!     },
//! )
//! .unwrap_err();
//! assert!(matches!(err, BoardError::NoProject));
//!
//! handle_reset(&mut session);
//! assert!(session.state().is_empty());
//! ```

use std::{path::PathBuf, str::FromStr};

use crate::{
    clock::Clock,
    display::{ExportResult, GenerateResult, MoveOutcome},
    error::{BoardError, Result},
    export,
    generator::TaskGenerator,
    models::{BoardFilter, Column, FilterUpdate},
    params::{ExportBoard, GenerateProject, MoveTask, SetFilter},
    session::BoardSession,
    store::Command,
};

/// Generates a project and loads it onto the board.
///
/// # Errors
///
/// Validation errors leave the board untouched; generator failures and
/// timeouts are recorded on the board and returned. See
/// [`BoardStore::generate`](crate::store::BoardStore::generate).
pub async fn handle_generate<C: Clock, G: TaskGenerator>(
    session: &mut BoardSession<C>,
    generator: &G,
    params: &GenerateProject,
) -> Result<GenerateResult> {
    session
        .store_mut()
        .generate(generator, &params.description)
        .await?;
    let summary = session.state().summary().ok_or(BoardError::NoProject)?;
    Ok(GenerateResult { summary })
}

/// Moves a task by running a complete drag gesture: lift the card, release
/// it over the target column.
///
/// # Errors
///
/// * `BoardError::InvalidInput` - unknown column name or task id
/// * `BoardError::NoProject` - nothing is loaded
/// * `BoardError::GestureInProgress` - another gesture still holds a card
pub fn handle_move_task<C: Clock>(
    session: &mut BoardSession<C>,
    params: &MoveTask,
) -> Result<MoveOutcome> {
    let to = Column::from_str(&params.to).map_err(|_| {
        BoardError::invalid_input("to").with_reason(format!(
            "Unknown column '{}'. Expected 'todo', 'inProgress', 'codeReview' or 'done'",
            params.to
        ))
    })?;
    if session.state().is_empty() {
        return Err(BoardError::NoProject);
    }

    let task_id = params.task_id.trim().to_string();
    let Some(from) = session.begin_drag(&task_id)?.map(|task| task.status) else {
        return Err(BoardError::invalid_input("task_id")
            .with_reason(format!("No task with ID '{task_id}' on the board")));
    };

    if session.end_drag(Some(to.as_str())) {
        Ok(MoveOutcome::Moved { task_id, from, to })
    } else {
        Ok(MoveOutcome::Unchanged {
            task_id,
            column: from,
        })
    }
}

/// Merges the given filter keys and returns the resulting filter.
pub fn handle_set_filter<C: Clock>(
    session: &mut BoardSession<C>,
    params: &SetFilter,
) -> BoardFilter {
    session.dispatch(Command::SetFilter(FilterUpdate::from(params)));
    session.state().filters.clone()
}

/// Writes the board as JSON, to `params.path` or the default export location.
///
/// # Errors
///
/// * `BoardError::NoProject` - nothing is loaded
/// * `BoardError::XdgDirectory` - the default location cannot be created
/// * `BoardError::FileSystem` - the file cannot be written
pub fn handle_export<C: Clock>(
    session: &BoardSession<C>,
    params: &ExportBoard,
) -> Result<ExportResult> {
    let state = session.state();
    let project = state.current_project.as_ref().ok_or(BoardError::NoProject)?;

    let path = match params.path.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => export::default_export_path(&export::default_file_name(&project.description))?,
    };

    export::write_export(state, &path, session.store().clock().now())?;
    Ok(ExportResult { path })
}

/// Returns the board to its initial empty state.
///
/// Any lifted card is dropped and any in-flight generation result will be
/// discarded when it arrives.
pub fn handle_reset<C: Clock>(session: &mut BoardSession<C>) {
    session.cancel_drag();
    session.dispatch(Command::ResetProject);
}
