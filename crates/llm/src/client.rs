//! Chat-completion client for an OpenAI-compatible backend.
//!
//! [`DiagnosisBackend`] is the seam between the orchestrator and the
//! model: it takes a [`DiagnosisRequest`] and returns the raw reply text.
//! [`OpenAiBackend`] is the production implementation; tests substitute
//! stubs.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::prompt::{build_user_prompt, DiagnosisRequest, SYSTEM_PROMPT};

/// Errors from the model backend. One variant per upstream failure class;
/// the message is passed through for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Model request failed: {0}")]
    Request(String),

    /// The backend returned a non-2xx status code.
    #[error("Model API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The reply arrived but did not carry a completion message.
    #[error("Malformed completion response: {0}")]
    Protocol(String),
}

/// A model backend capable of running one diagnosis request.
#[async_trait]
pub trait DiagnosisBackend: Send + Sync {
    /// Submit one diagnosis request, returning the raw reply text.
    async fn diagnose(&self, request: &DiagnosisRequest) -> Result<String, BackendError>;
}

/// Configuration for the OpenAI-compatible backend, loaded from env.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base API URL (default: `https://api.openai.com/v1`).
    pub base_url: String,
    /// API key, from `OPENAI_API_KEY`.
    pub api_key: String,
    /// Model name (default: `gpt-5`).
    pub model: String,
    /// Per-request timeout in seconds (default: `60`). A hung backend
    /// call must not hold the diagnosis request open indefinitely.
    pub timeout_secs: u64,
    /// Completion token budget (default: `8192`).
    pub max_completion_tokens: u32,
}

impl LlmConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                     |
    /// |--------------------------|-----------------------------|
    /// | `OPENAI_BASE_URL`        | `https://api.openai.com/v1` |
    /// | `OPENAI_API_KEY`         | (required)                  |
    /// | `DIAGNOSIS_MODEL`        | `gpt-5`                     |
    /// | `DIAGNOSIS_TIMEOUT_SECS` | `60`                        |
    /// | `DIAGNOSIS_MAX_TOKENS`   | `8192`                      |
    pub fn from_env() -> Self {
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());

        let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");

        let model = std::env::var("DIAGNOSIS_MODEL").unwrap_or_else(|_| "gpt-5".into());

        let timeout_secs: u64 = std::env::var("DIAGNOSIS_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("DIAGNOSIS_TIMEOUT_SECS must be a valid u64");

        let max_completion_tokens: u32 = std::env::var("DIAGNOSIS_MAX_TOKENS")
            .unwrap_or_else(|_| "8192".into())
            .parse()
            .expect("DIAGNOSIS_MAX_TOKENS must be a valid u32");

        Self {
            base_url,
            api_key,
            model,
            timeout_secs,
            max_completion_tokens,
        }
    }
}

/// Production backend over the OpenAI chat-completions API.
pub struct OpenAiBackend {
    client: reqwest::Client,
    config: LlmConfig,
}

/// Shape of the completion response we care about.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

impl OpenAiBackend {
    /// Create a backend from config. The timeout lives on the reqwest
    /// client so every request to the model is bounded.
    pub fn new(config: LlmConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Request(e.to_string()))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl DiagnosisBackend for OpenAiBackend {
    async fn diagnose(&self, request: &DiagnosisRequest) -> Result<String, BackendError> {
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_user_prompt(request) },
            ],
            "response_format": { "type": "json_object" },
            "max_completion_tokens": self.config.max_completion_tokens,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Model API returned an error");
            return Err(BackendError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Protocol(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| BackendError::Protocol("response carried no completion text".into()))
    }
}
