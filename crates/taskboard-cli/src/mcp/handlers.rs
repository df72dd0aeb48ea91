//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use taskboard_core::{
    display::{Board, GenerateResult, OperationStatus},
    generator::{self, TaskGenerator},
    handlers,
    params as core,
    session::BoardSession,
    BoardError, HttpTaskGenerator,
};
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// `#[serde(transparent)]` passes (de)serialization straight through to the
/// wrapped core type, so the core crate stays free of MCP concerns.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type GenerateProject = McpParams<core::GenerateProject>;
pub type MoveTask = McpParams<core::MoveTask>;
pub type SetFilter = McpParams<core::SetFilter>;
pub type ExportBoard = McpParams<core::ExportBoard>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<BoardSession>>,
    generator: Arc<HttpTaskGenerator>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<BoardSession>>, generator: Arc<HttpTaskGenerator>) -> Self {
        Self { session, generator }
    }

    /// Runs a generation without holding the board lock while the request is
    /// in flight, so `reset_board` and reads stay responsive. A reset or a
    /// newer request in the meantime makes this result stale.
    ///
    /// The request and the step applying its result run on their own task,
    /// so a client cancelling the tool call cannot leave the board loading.
    pub async fn generate_project(
        &self,
        Parameters(params): Parameters<GenerateProject>,
    ) -> McpResult {
        debug!("generate_project: {:?}", params);

        let ticket = self
            .session
            .lock()
            .await
            .store_mut()
            .begin_generation(&params.as_ref().description, self.generator.timeout())
            .map_err(|e| to_mcp_error("Failed to generate project", &e))?;

        let session = Arc::clone(&self.session);
        let task_generator = Arc::clone(&self.generator);
        let request = tokio::spawn(async move {
            let outcome =
                generator::generate_with_timeout(task_generator.as_ref(), ticket.description())
                    .await;
            let mut session = session.lock().await;
            session.store_mut().finish_generation(ticket, outcome)
        });
        request
            .await
            .map_err(|e| ErrorData::internal_error(format!("Task generation failed: {e}"), None))?
            .map_err(|e| to_mcp_error("Failed to generate project", &e))?;

        let session = self.session.lock().await;
        let summary = session
            .state()
            .summary()
            .ok_or_else(|| to_mcp_error("Failed to generate project", &BoardError::NoProject))?;
        let status = OperationStatus::success(GenerateResult { summary }.to_string().trim_end());
        text_result(format!("{status}\n{}", Board(session.state())))
    }

    pub async fn show_board(&self) -> McpResult {
        debug!("show_board");
        let session = self.session.lock().await;
        text_result(Board(session.state()).to_string())
    }

    pub async fn move_task(&self, Parameters(params): Parameters<MoveTask>) -> McpResult {
        debug!("move_task: {:?}", params);

        let mut session = self.session.lock().await;
        let outcome = handlers::handle_move_task(&mut *session, params.as_ref())
            .map_err(|e| to_mcp_error("Failed to move task", &e))?;
        text_result(OperationStatus::success(outcome.to_string().trim_end()).to_string())
    }

    pub async fn set_filter(&self, Parameters(params): Parameters<SetFilter>) -> McpResult {
        debug!("set_filter: {:?}", params);

        let mut session = self.session.lock().await;
        let filter = handlers::handle_set_filter(&mut *session, params.as_ref());
        let status = OperationStatus::success(format!("Showing {filter}"));
        text_result(format!("{status}\n{}", Board(session.state())))
    }

    pub async fn export_board(&self, Parameters(params): Parameters<ExportBoard>) -> McpResult {
        debug!("export_board: {:?}", params);

        let session = self.session.lock().await;
        let exported = handlers::handle_export(&*session, params.as_ref())
            .map_err(|e| to_mcp_error("Failed to export board", &e))?;
        text_result(OperationStatus::success(exported.to_string().trim_end()).to_string())
    }

    pub async fn reset_board(&self) -> McpResult {
        debug!("reset_board");

        let mut session = self.session.lock().await;
        handlers::handle_reset(&mut *session);
        text_result(OperationStatus::success("Board reset to an empty state").to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use taskboard_core::GeneratorConfig;

    use super::*;

    fn handlers() -> McpHandlers {
        let generator = HttpTaskGenerator::new(GeneratorConfig::default()).unwrap();
        McpHandlers::new(
            Arc::new(Mutex::new(BoardSession::new())),
            Arc::new(generator),
        )
    }

    fn text_of(result: &CallToolResult) -> String {
        serde_json::to_value(result).unwrap()["content"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    }

    #[tokio::test]
    async fn test_show_empty_board() {
        let result = handlers().show_board().await.unwrap();
        assert!(text_of(&result).contains("No project loaded."));
    }

    #[tokio::test]
    async fn test_blank_description_is_invalid_params() {
        let params: GenerateProject = serde_json::from_str(r#"{"description":"   "}"#).unwrap();
        let err = handlers()
            .generate_project(Parameters(params))
            .await
            .unwrap_err();
        assert!(err.message.contains("cannot be empty"));
    }

    #[tokio::test]
    async fn test_move_without_project_fails() {
        let params: MoveTask =
            serde_json::from_str(r#"{"task_id":"backend-0","to":"done"}"#).unwrap();
        let err = handlers().move_task(Parameters(params)).await.unwrap_err();
        assert!(err.message.contains("No project is loaded"));
    }

    #[tokio::test]
    async fn test_cancelled_call_still_settles_generation() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/generate-tasks", listener.local_addr().unwrap());
        std::thread::spawn(move || {
            let _connection = listener.accept();
            std::thread::sleep(Duration::from_secs(30));
        });
        let config = GeneratorConfig::builder()
            .with_endpoint(Some(endpoint))
            .with_timeout(Some(Duration::from_secs(1)))
            .build()
            .unwrap();
        let session = Arc::new(Mutex::new(BoardSession::new()));
        let handlers = McpHandlers::new(
            Arc::clone(&session),
            Arc::new(HttpTaskGenerator::new(config).unwrap()),
        );

        let params: GenerateProject =
            serde_json::from_str(r#"{"description":"Slow project"}"#).unwrap();
        let call = tokio::time::timeout(
            Duration::from_millis(100),
            handlers.generate_project(Parameters(params)),
        )
        .await;
        assert!(call.is_err());
        assert!(session.lock().await.state().loading);

        tokio::time::sleep(Duration::from_secs(3)).await;
        let session = session.lock().await;
        assert!(!session.state().loading);
        assert!(session
            .state()
            .error
            .as_deref()
            .unwrap_or_default()
            .contains("timed out after 1s"));
    }

    #[tokio::test]
    async fn test_set_filter_reports_active_filter() {
        let params: SetFilter = serde_json::from_str(r#"{"search":"auth"}"#).unwrap();
        let result = handlers().set_filter(Parameters(params)).await.unwrap();
        assert!(text_of(&result).contains("Showing search \"auth\""));
    }
}
