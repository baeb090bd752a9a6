// src/web/handlers/feedback.rs

use crate::database::{DatabaseConfig, FeedbackRepository, StoredFeedback};
use crate::web::types::{ActionResponse, DataResponse, FeedbackRequest, StandardErrorResponse};

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

const DEFAULT_FEEDBACK_LIMIT: i64 = 50;

pub async fn submit_feedback_handler(
    request: Json<FeedbackRequest>,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    if !(1..=5).contains(&request.score) {
        return Err(Json(StandardErrorResponse::new(
            "Feedback score must be between 1 and 5".to_string(),
            "INVALID_SCORE".to_string(),
            vec!["Use a rating from 1 (poor) to 5 (excellent)".to_string()],
        )));
    }

    if request.name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Name and email are required".to_string(),
            "MISSING_IDENTITY".to_string(),
            vec!["Provide 'name' and 'email' fields".to_string()],
        )));
    }

    let pool = match db_config.pool() {
        Ok(pool) => pool,
        Err(e) => {
            error!("Database connection failed: {}", e);
            return Err(Json(StandardErrorResponse::new(
                "Database connection failed".to_string(),
                "DATABASE_ERROR".to_string(),
                vec!["Try again in a few moments".to_string()],
            )));
        }
    };

    let repository = FeedbackRepository::new(pool);
    match repository
        .store(
            request.name.trim(),
            request.email.trim(),
            request.score,
            request.category.as_deref(),
            request.comments.as_deref(),
        )
        .await
    {
        Ok(_) => {
            info!("Feedback received from {}", request.email);
            Ok(Json(ActionResponse::success(
                "Thank you for your feedback".to_string(),
                "feedback_recorded".to_string(),
            )))
        }
        Err(e) => {
            error!("Failed to store feedback from {}: {}", request.email, e);
            Err(Json(StandardErrorResponse::new(
                "Failed to record feedback".to_string(),
                "FEEDBACK_STORE_ERROR".to_string(),
                vec!["Try again in a few moments".to_string()],
            )))
        }
    }
}

pub async fn list_feedback_handler(
    limit: Option<i64>,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<DataResponse<Vec<StoredFeedback>>>, Json<StandardErrorResponse>> {
    let pool = match db_config.pool() {
        Ok(pool) => pool,
        Err(e) => {
            error!("Database connection failed: {}", e);
            return Err(Json(StandardErrorResponse::new(
                "Database connection failed".to_string(),
                "DATABASE_ERROR".to_string(),
                vec!["Try again in a few moments".to_string()],
            )));
        }
    };

    let repository = FeedbackRepository::new(pool);
    match repository
        .list_recent(limit.unwrap_or(DEFAULT_FEEDBACK_LIMIT))
        .await
    {
        Ok(feedback) => {
            let message = format!("Found {} feedback entries", feedback.len());
            Ok(Json(DataResponse::success(message, feedback)))
        }
        Err(e) => {
            error!("Failed to list feedback: {}", e);
            Err(Json(StandardErrorResponse::new(
                "Failed to load feedback".to_string(),
                "FEEDBACK_LIST_ERROR".to_string(),
                vec!["Try again in a few moments".to_string()],
            )))
        }
    }
}
