// src/web/types.rs

use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::{Deserialize, Serialize};

use crate::intelligence::CareerAssistant;
use crate::pipeline::AnalysisPipeline;
use crate::types::ResumeRecord;

/// Multipart form for the analyze endpoint: candidate identity fields,
/// an optional target job description, and the resume file itself.
#[derive(FromForm)]
pub struct AnalyzeUploadForm<'f> {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub job_description: Option<String>,
    pub resume: TempFile<'f>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct FeedbackRequest {
    pub name: String,
    pub email: String,
    pub score: i64,
    pub category: Option<String>,
    pub comments: Option<String>,
}

/// Caller-retained conversation plus optional resume context. The server
/// keeps no chat state between requests.
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AssistantRequest {
    pub messages: Vec<AssistantTurn>,
    pub record: Option<ResumeRecord>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AssistantTurn {
    pub role: String,
    pub content: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AssistantReply {
    pub reply: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct InsightsData {
    pub total_analyses: i64,
    pub average_overall_score: f64,
    pub average_ats_score: f64,
    pub average_feedback_score: f64,
    pub field_distribution: Vec<DistributionEntry>,
    pub level_distribution: Vec<DistributionEntry>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DistributionEntry {
    pub key: String,
    pub count: i64,
}

/// Shared pipeline state; one concrete client type across the server.
pub struct PipelineState {
    pub pipeline: AnalysisPipeline<crate::llm::OpenRouterClient>,
    pub assistant: CareerAssistant<crate::llm::OpenRouterClient>,
}

// Standard response envelope types

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub action: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Action,
    Error,
}

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

impl ActionResponse {
    pub fn success(message: String, action: String) -> Self {
        Self {
            response_type: ResponseType::Action,
            success: true,
            message,
            action,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}
