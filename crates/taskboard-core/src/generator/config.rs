//! Builder for configuring the task generator client.

use std::time::Duration;

use crate::error::{BoardError, Result};

/// Endpoint of a locally running task generator service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate-tasks";

/// How long a generation request may take before it is abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Validated generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GeneratorConfig {
    /// Starts a builder with default settings.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }
}

/// Builder for creating and validating [`GeneratorConfig`] instances.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use taskboard_core::generator::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .with_endpoint(Some("http://127.0.0.1:9000/generate-tasks"))
///     .with_timeout(Some(Duration::from_secs(10)))
///     .build()?;
/// assert_eq!(config.timeout, Duration::from_secs(10));
///
/// // Unset values keep their defaults
/// let config = GeneratorConfig::builder().with_endpoint(None::<String>).build()?;
/// assert_eq!(config.endpoint, "http://localhost:8000/generate-tasks");
/// # Ok::<(), taskboard_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl GeneratorConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom generator endpoint.
    ///
    /// If not specified, uses [`DEFAULT_ENDPOINT`].
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: Option<S>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.into());
        }
        self
    }

    /// Sets a custom request timeout.
    ///
    /// If not specified, uses [`DEFAULT_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if let Some(timeout) = timeout {
            self.timeout = Some(timeout);
        }
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidInput` if the endpoint is not an http(s) URL
    /// or the timeout is zero.
    pub fn build(self) -> Result<GeneratorConfig> {
        let endpoint = self
            .endpoint
            .map(|e| e.trim().to_string())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let has_host = endpoint
            .strip_prefix("http://")
            .or_else(|| endpoint.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(BoardError::invalid_input("endpoint")
                .with_reason(format!("Expected an http:// or https:// URL, got '{endpoint}'")));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(BoardError::invalid_input("timeout").with_reason("Timeout must be non-zero"));
        }

        Ok(GeneratorConfig { endpoint, timeout })
    }
}
