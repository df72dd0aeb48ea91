//! MCP server implementation for Taskboard
//!
//! Exposes one in-memory board to AI assistants over the Model Context
//! Protocol. Every tool works on the same session; the board is lost when the
//! server stops.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use taskboard_core::{session::BoardSession, HttpTaskGenerator};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{ExportBoard, GenerateProject, McpResult, MoveTask, SetFilter};

/// MCP server for Taskboard
#[derive(Clone)]
pub struct TaskboardMcpServer {
    session: Arc<Mutex<BoardSession>>,
    generator: Arc<HttpTaskGenerator>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TaskboardMcpServer {
    pub fn new(generator: HttpTaskGenerator) -> Self {
        Self {
            session: Arc::new(Mutex::new(BoardSession::new())),
            generator: Arc::new(generator),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.session.clone(), self.generator.clone())
    }

    #[tool(
        name = "generate_project",
        description = "Break a project description into tasks grouped by the roles needed to build it. Replaces the current board: every generated task starts in the 'todo' column. Returns the new board with task IDs for use with move_task."
    )]
    async fn generate_project(&self, params: Parameters<GenerateProject>) -> McpResult {
        self.handlers().generate_project(params).await
    }

    #[tool(
        name = "show_board",
        description = "Show the current board: the project, the active filter and the tasks in each column (todo, inProgress, codeReview, done) with their IDs and roles."
    )]
    async fn show_board(&self) -> McpResult {
        self.handlers().show_board().await
    }

    #[tool(
        name = "move_task",
        description = "Move a task to another column. Provide the task ID shown on the board and the target column: 'todo', 'inProgress', 'codeReview' or 'done'. The task is appended at the end of the target column."
    )]
    async fn move_task(&self, params: Parameters<MoveTask>) -> McpResult {
        self.handlers().move_task(params).await
    }

    #[tool(
        name = "set_filter",
        description = "Narrow the visible board. 'search' matches title, description and role case-insensitively; 'roles' limits the board to the listed roles. Omitted fields keep their current value; an empty search or empty role list clears that filter."
    )]
    async fn set_filter(&self, params: Parameters<SetFilter>) -> McpResult {
        self.handlers().set_filter(params).await
    }

    #[tool(
        name = "export_board",
        description = "Write the project and every task with its current column to a JSON file. Without 'path' the file is stored under the XDG data directory with a name derived from the project description. Returns the path written."
    )]
    async fn export_board(&self, params: Parameters<ExportBoard>) -> McpResult {
        self.handlers().export_board(params).await
    }

    #[tool(
        name = "reset_board",
        description = "Clear the project, all tasks and filters. A generation still in flight is discarded when it completes."
    )]
    async fn reset_board(&self) -> McpResult {
        self.handlers().reset_board().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TaskboardMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "taskboard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Taskboard turns a project idea into role-based tasks on a kanban board.

## Board
- Four columns in fixed order: todo, inProgress, codeReview, done
- Every task has an ID like 'backend-developer-0', a title, a description and a role
- The board holds one project at a time and lives only as long as this server

## Workflow
1. `generate_project` with a description of what to build
2. `show_board` to see tasks and their IDs
3. `move_task` as work progresses (todo → inProgress → codeReview → done)
4. `set_filter` to focus on a role or a keyword
5. `export_board` to save the board as JSON
6. `reset_board` to start over"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: TaskboardMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Taskboard MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
