// src/web/handlers/assistant.rs
//! Career assistant chat handler.

use crate::llm::ChatMessage;
use crate::web::types::{
    AssistantReply, AssistantRequest, DataResponse, PipelineState, StandardErrorResponse,
};

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn assistant_handler(
    request: Json<AssistantRequest>,
    pipeline: &State<PipelineState>,
) -> Result<Json<DataResponse<AssistantReply>>, Json<StandardErrorResponse>> {
    if request.messages.is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Conversation is empty".to_string(),
            "EMPTY_CONVERSATION".to_string(),
            vec!["Send at least one message with role 'user'".to_string()],
        )));
    }

    let mut history = Vec::with_capacity(request.messages.len());
    for turn in &request.messages {
        let message = match turn.role.as_str() {
            "user" => ChatMessage::user(turn.content.clone()),
            "assistant" => ChatMessage::assistant(turn.content.clone()),
            other => {
                return Err(Json(StandardErrorResponse::new(
                    format!("Unsupported message role: {}", other),
                    "INVALID_ROLE".to_string(),
                    vec!["Use roles 'user' and 'assistant' only".to_string()],
                )));
            }
        };
        history.push(message);
    }

    info!("Assistant request ({} turns)", history.len());

    match pipeline
        .assistant
        .reply(&history, request.record.as_ref())
        .await
    {
        Ok(reply) => Ok(Json(DataResponse::success(
            "Assistant reply generated".to_string(),
            AssistantReply { reply },
        ))),
        Err(e) => {
            error!("Assistant reply failed: {}", e);
            Err(Json(StandardErrorResponse::new(
                "Assistant is currently unavailable".to_string(),
                "ASSISTANT_ERROR".to_string(),
                vec![
                    "Try again in a few moments".to_string(),
                    "Check your connection".to_string(),
                ],
            )))
        }
    }
}
