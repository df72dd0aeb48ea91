//! JSON export of the loaded project and its board layout.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use log::info;
use serde::Serialize;

use crate::{
    error::{BoardError, Result},
    models::{BoardSummary, Project, Task},
    store::BoardState,
};

/// Characters of the description kept in the default file name.
const FILE_NAME_CHARS: usize = 50;

const FALLBACK_FILE_NAME: &str = "project_breakdown.json";

/// Snapshot of the board written to disk.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardExport<'a> {
    pub project: &'a Project,
    /// Tasks in column order with their current status
    pub tasks: Vec<&'a Task>,
    pub summary: BoardSummary,
    pub exported_at: Timestamp,
}

impl<'a> BoardExport<'a> {
    /// Captures the current board.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::NoProject` when nothing is loaded.
    pub fn from_state(state: &'a BoardState, exported_at: Timestamp) -> Result<Self> {
        let project = state.current_project.as_ref().ok_or(BoardError::NoProject)?;
        Ok(Self {
            project,
            tasks: state.columns.flatten().collect(),
            summary: BoardSummary::new(project, &state.columns),
            exported_at,
        })
    }

    /// Pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Derives an export file name from a project description.
///
/// # Examples
///
/// ```rust
/// use taskboard_core::export::default_file_name;
///
/// assert_eq!(
///     default_file_name("A real-time chat app!"),
///     "A_real_time_chat_app_breakdown.json"
/// );
/// assert_eq!(default_file_name("???"), "project_breakdown.json");
/// ```
pub fn default_file_name(description: &str) -> String {
    let kept: String = description
        .chars()
        .take(FILE_NAME_CHARS)
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let mut name = String::with_capacity(kept.len());
    let mut in_gap = false;
    for c in kept.trim().chars() {
        if c == '-' || c.is_whitespace() {
            if !in_gap {
                name.push('_');
            }
            in_gap = true;
        } else {
            name.push(c);
            in_gap = false;
        }
    }

    if name.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        format!("{name}_breakdown.json")
    }
}

/// Default location for an export:
/// `$XDG_DATA_HOME/taskboard/exports/<file_name>`, creating the directory.
pub fn default_export_path(file_name: &str) -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("taskboard")
        .place_data_file(Path::new("exports").join(file_name))
        .map_err(|e| BoardError::XdgDirectory(e.to_string()))
}

/// Serializes the board and writes it to `path`, creating parent directories.
///
/// # Errors
///
/// * `BoardError::NoProject` - nothing is loaded
/// * `BoardError::FileSystem` - the file or its directory cannot be written
pub fn write_export(state: &BoardState, path: &Path, exported_at: Timestamp) -> Result<()> {
    let json = BoardExport::from_state(state, exported_at)?.to_json_pretty()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BoardError::FileSystem {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, json).map_err(|e| BoardError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("Exported board to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::{Column, Columns};

    fn loaded_state() -> BoardState {
        let at = Timestamp::from_second(1_700_000_000).unwrap();
        let task = |id: &str, status: Column| Task {
            id: id.to_string(),
            title: id.to_string(),
            description: id.to_string(),
            role: "Backend".to_string(),
            status,
            created_at: at,
            updated_at: at,
        };
        let project = Project {
            description: "Chat app".to_string(),
            generated_at: at,
            selected_roles: vec!["Backend".to_string()],
            tasks: vec![task("backend-0", Column::Todo), task("backend-1", Column::Todo)],
        };
        BoardState {
            columns: Columns {
                todo: vec![task("backend-1", Column::Todo)],
                done: vec![task("backend-0", Column::Done)],
                ..Default::default()
            },
            current_project: Some(project),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            default_file_name("  E-commerce -- platform  "),
            "E_commerce_platform_breakdown.json"
        );
        assert_eq!(default_file_name("snake_case stays"), "snake_case_stays_breakdown.json");
        assert_eq!(default_file_name(""), "project_breakdown.json");

        let long = "word ".repeat(20);
        let name = default_file_name(&long);
        assert!(name.ends_with("_breakdown.json"));
        assert_eq!(name.matches("word").count(), 10);
    }

    #[test]
    fn test_export_requires_project() {
        let err = BoardExport::from_state(&BoardState::initial(), Timestamp::UNIX_EPOCH).unwrap_err();
        assert!(matches!(err, BoardError::NoProject));
    }

    #[test]
    fn test_export_lists_tasks_in_column_order() {
        let state = loaded_state();
        let export = BoardExport::from_state(&state, Timestamp::UNIX_EPOCH).unwrap();
        let ids: Vec<&str> = export.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["backend-1", "backend-0"]);
        assert_eq!(export.summary.done, 1);

        let value: serde_json::Value = serde_json::from_str(&export.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["project"]["description"], "Chat app");
        assert_eq!(value["tasks"][1]["status"], "done");
        assert_eq!(value["summary"]["totalTasks"], 2);
        assert!(value["exportedAt"].is_string());
    }

    #[test]
    fn test_write_export_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("board.json");

        write_export(&loaded_state(), &path, Timestamp::UNIX_EPOCH).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"backend-0\""));
    }
}
