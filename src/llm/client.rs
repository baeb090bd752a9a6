//! HTTP client for an OpenAI-compatible chat-completions endpoint.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, error};

use super::{ChatCompletion, ChatRequest};
use crate::error::LlmError;

const COMPLETIONS_ENDPOINT: &str = "/chat/completions";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Clone)]
pub struct OpenRouterClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenRouterClient {
    pub fn new(base_url: String, api_key: String, timeout_seconds: Option<u64>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(
                timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: String,
}

impl ChatCompletion for OpenRouterClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
        let url = format!("{}{}", self.base_url, COMPLETIONS_ENDPOINT);
        debug!("Calling completion provider: {} (model: {})", url, request.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        if !status.is_success() {
            error!("Completion provider error {}: {}", status, body);
            return Err(LlmError::Provider {
                status: status.as_u16(),
                message: body,
            });
        }

        let completion: CompletionResponse =
            serde_json::from_str(&body).map_err(|_| LlmError::Provider {
                status: status.as_u16(),
                message: "response body was not a chat completion".to_string(),
            })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::Provider {
                status: status.as_u16(),
                message: "completion contained no choices".to_string(),
            })
    }
}
