//! Conversational career assistant: the third model surface.
//!
//! Stateless by design: the full message history travels with every
//! request and the caller retains it, so nothing conversational lives
//! server-side between turns.

use tracing::info;

use crate::error::LlmError;
use crate::llm::{ChatCompletion, ChatMessage, ChatRequest};
use crate::types::ResumeRecord;

pub const DEFAULT_ASSISTANT_MODEL: &str = "deepseek/deepseek-chat";

const ASSISTANT_TEMPERATURE: f32 = 0.7;
const ASSISTANT_MAX_TOKENS: u32 = 1000;

const ASSISTANT_SYSTEM_PROMPT: &str = "You are an expert career counselor and resume advisor \
    with 20+ years of experience. Provide helpful, actionable advice about careers, job \
    searching, resume writing, and professional development. Be encouraging, specific, and \
    professional in your responses.";

pub struct CareerAssistant<C> {
    client: C,
    model: String,
}

impl<C: ChatCompletion> CareerAssistant<C> {
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Answer the latest turn of a conversation. When an extracted record
    /// is supplied its JSON is embedded in the system prompt so the advice
    /// is grounded in the candidate's actual resume.
    ///
    /// Unlike extraction and analysis there is no degraded path: a chat
    /// turn with nothing to say is useless, so failures surface to the
    /// caller.
    pub async fn reply(
        &self,
        history: &[ChatMessage],
        record: Option<&ResumeRecord>,
    ) -> Result<String, LlmError> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(system_prompt(record)));
        messages.extend_from_slice(history);

        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: ASSISTANT_TEMPERATURE,
            max_tokens: ASSISTANT_MAX_TOKENS,
        };

        let reply = self.client.complete(request).await?;
        info!(
            "Assistant reply generated ({} turns in history)",
            history.len()
        );
        Ok(reply)
    }
}

fn system_prompt(record: Option<&ResumeRecord>) -> String {
    match record.and_then(|r| serde_json::to_string(r).ok()) {
        Some(context) => format!("{ASSISTANT_SYSTEM_PROMPT}\nUser's Resume Context: {context}"),
        None => ASSISTANT_SYSTEM_PROMPT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records the request it was given and answers with a fixed string.
    #[derive(Clone, Default)]
    struct RecordingClient {
        seen: Arc<Mutex<Option<ChatRequest>>>,
    }

    impl ChatCompletion for RecordingClient {
        async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
            *self.seen.lock().expect("request lock") = Some(request);
            Ok("Polish your summary section first.".to_string())
        }
    }

    struct FailingClient;

    impl ChatCompletion for FailingClient {
        async fn complete(&self, _request: ChatRequest) -> Result<String, LlmError> {
            Err(LlmError::Transport("timed out".to_string()))
        }
    }

    #[tokio::test]
    async fn history_is_forwarded_after_the_system_prompt() {
        let client = RecordingClient::default();
        let assistant = CareerAssistant::new(client.clone(), DEFAULT_ASSISTANT_MODEL);

        let history = vec![
            ChatMessage::user("How do I move into data engineering?"),
            ChatMessage::assistant("Start with SQL and a pipeline project."),
            ChatMessage::user("Which certifications help?"),
        ];

        let reply = assistant.reply(&history, None).await.unwrap();
        assert_eq!(reply, "Polish your summary section first.");

        let request = client.seen.lock().unwrap().take().unwrap();
        assert_eq!(request.messages.len(), 4);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].content, "How do I move into data engineering?");
        assert_eq!(request.messages[3].role, "user");
    }

    #[tokio::test]
    async fn record_context_lands_in_the_system_prompt() {
        let client = RecordingClient::default();
        let assistant = CareerAssistant::new(client.clone(), DEFAULT_ASSISTANT_MODEL);

        let mut record = ResumeRecord::default();
        record.name = Some("Jo Smith".to_string());
        record.primary_field = Some("web_development".to_string());

        assistant
            .reply(&[ChatMessage::user("Rate my resume")], Some(&record))
            .await
            .unwrap();

        let request = client.seen.lock().unwrap().take().unwrap();
        let system = &request.messages[0].content;
        assert!(system.contains("Resume Context"));
        assert!(system.contains("Jo Smith"));
        assert!(system.contains("web_development"));

        // Without a record the prompt carries no context block.
        assistant
            .reply(&[ChatMessage::user("Rate my resume")], None)
            .await
            .unwrap();
        let request = client.seen.lock().unwrap().take().unwrap();
        assert!(!request.messages[0].content.contains("Resume Context"));
    }

    #[tokio::test]
    async fn failures_surface_instead_of_degrading() {
        let assistant = CareerAssistant::new(FailingClient, DEFAULT_ASSISTANT_MODEL);
        let err = assistant
            .reply(&[ChatMessage::user("hello")], None)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
    }
}
