//! Chat-completion provider seam.

pub mod client;
pub mod json;

pub use client::OpenRouterClient;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Single round-trip to a completion backend. The pipeline is generic over
/// this so tests can substitute canned or failing backends.
pub trait ChatCompletion: Send + Sync {
    fn complete(
        &self,
        request: ChatRequest,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}
