//! HTTP client for the remote task generator.

use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;

use super::{GenerationRequest, GenerationResponse, GeneratorConfig, TaskGenerator};
use crate::error::{BoardError, Result, ResultExt};

/// Task generator reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTaskGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

impl HttpTaskGenerator {
    /// Creates a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Configuration` if the HTTP client cannot be
    /// initialized.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .with_context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl TaskGenerator for HttpTaskGenerator {
    async fn generate(&self, description: &str) -> Result<GenerationResponse> {
        debug!("POST {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&GenerationRequest {
                project_description: description.to_string(),
            })
            .send()
            .await
            .map_err(|e| BoardError::request("Failed to send request", e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Task generator answered HTTP {status}");
            return Err(BoardError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BoardError::request("Failed to read response body", e))?;
        GenerationResponse::from_slice(&body)
    }

    fn timeout(&self) -> Duration {
        self.config.timeout
    }
}
