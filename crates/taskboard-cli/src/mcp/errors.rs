//! Error handling utilities for MCP server

use rmcp::ErrorData;
use taskboard_core::BoardError;

/// Converts a board error into an MCP error, reporting validation failures
/// as invalid parameters
pub fn to_mcp_error(message: &str, error: &BoardError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_validation() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
