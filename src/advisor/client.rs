//! Advisor REST API Client
//!
//! HTTP client for an external AI completion service.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Advisor service client
pub struct AdvisorClient {
    client: Client,
    config: AdvisorConfig,
}

/// Configuration for the advisor client
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Base URL of the completion service (e.g. "http://localhost:8090")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8090".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    completion: String,
}

impl AdvisorClient {
    /// Create a new advisor client with the given configuration
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(AdvisorError::Request)?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Check if the advisor service is reachable
    pub async fn health_check(&self) -> Result<(), AdvisorError> {
        let url = format!("{}/health", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AdvisorError::Unavailable)
        }
    }

    /// Request a free-text completion for the given prompt
    pub async fn complete(&self, prompt: &str) -> Result<String, AdvisorError> {
        let url = format!("{}/v1/complete", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .json(&CompletionRequest { prompt })
            .send()
            .await
            .map_err(classify_error)?;

        if response.status().is_success() {
            let body: CompletionResponse =
                response.json().await.map_err(AdvisorError::Request)?;
            Ok(body.completion)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(AdvisorError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

/// Map transport failures onto the error variants callers branch on
fn classify_error(e: reqwest::Error) -> AdvisorError {
    if e.is_timeout() {
        AdvisorError::Timeout
    } else if e.is_connect() {
        AdvisorError::Unavailable
    } else {
        AdvisorError::Request(e)
    }
}

/// Advisor client errors
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Request timed out
    #[error("Advisor request timed out")]
    Timeout,

    /// Service is not reachable
    #[error("Advisor service unavailable")]
    Unavailable,

    /// Service responded with an error status
    #[error("Advisor API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Other transport error
    #[error("Advisor request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdvisorConfig::default();
        assert_eq!(config.request_timeout_ms, 5000);
        assert!(config.base_url.starts_with("http://"));
    }
}
