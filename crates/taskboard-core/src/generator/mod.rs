//! Remote task generator: wire contract, configuration and client.
//!
//! The generator is an opaque collaborator that turns a project description
//! into a role selection plus a task list per role:
//!
//! ```text
//! POST <endpoint>   {"project_description": "..."}
//! 200 OK            {"selected_roles": [...], "role_tasks": {"<role>": [...]}}
//! ```
//!
//! Any other status or a body that does not match is an error. A request that
//! is not answered within the configured timeout is abandoned and reported as
//! a timeout, which is distinct from HTTP errors.

mod config;
mod http;

use std::{collections::BTreeMap, future::Future, time::Duration};

use serde::{Deserialize, Serialize};

pub use config::{GeneratorConfig, GeneratorConfigBuilder, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use http::HttpTaskGenerator;

use crate::error::{BoardError, Result};

/// Request body sent to the generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    pub project_description: String,
}

/// Successful generator response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerationResponse {
    pub selected_roles: Vec<String>,
    pub role_tasks: BTreeMap<String, Vec<String>>,
}

impl GenerationResponse {
    /// Parses a response body, reporting contract violations as
    /// `BoardError::MalformedResponse`.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| BoardError::MalformedResponse {
            message: e.to_string(),
        })
    }
}

/// Anything that can turn a description into roles and tasks.
pub trait TaskGenerator {
    /// Requests a breakdown for an already validated description.
    fn generate(
        &self,
        description: &str,
    ) -> impl Future<Output = Result<GenerationResponse>> + Send;

    /// How long a request may take before it is abandoned.
    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }
}

/// Runs a request, cancelling it once the generator's timeout elapses.
///
/// # Errors
///
/// Returns `BoardError::Timeout` when the deadline passes; the in-flight
/// request future is dropped at that point. Other errors come from the
/// generator itself.
pub async fn generate_with_timeout<G: TaskGenerator>(
    generator: &G,
    description: &str,
) -> Result<GenerationResponse> {
    let limit = generator.timeout();
    match tokio::time::timeout(limit, generator.generate(description)).await {
        Ok(result) => result,
        Err(_) => Err(BoardError::timeout(limit)),
    }
}
