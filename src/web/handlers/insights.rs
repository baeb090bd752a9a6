// src/web/handlers/insights.rs
//! Aggregated statistics over stored analyses and feedback.

use crate::database::{AnalysisRepository, DatabaseConfig, FeedbackRepository};
use crate::web::types::{DataResponse, DistributionEntry, InsightsData, StandardErrorResponse};

use rocket::serde::json::Json;
use rocket::State;
use tracing::error;

pub async fn insights_handler(
    db_config: &State<DatabaseConfig>,
) -> Result<Json<DataResponse<InsightsData>>, Json<StandardErrorResponse>> {
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

    let analyses = AnalysisRepository::new(pool);
    let feedback = FeedbackRepository::new(pool);

    let insights = match build_insights(&analyses, &feedback).await {
        Ok(insights) => insights,
        Err(e) => {
            error!("Failed to compute insights: {}", e);
            return Err(Json(StandardErrorResponse::new(
                "Failed to compute insights".to_string(),
                "INSIGHTS_ERROR".to_string(),
                vec!["Try again in a few moments".to_string()],
            )));
        }
    };

    Ok(Json(DataResponse::success(
        "Insights computed".to_string(),
        insights,
    )))
}

async fn build_insights(
    analyses: &AnalysisRepository<'_>,
    feedback: &FeedbackRepository<'_>,
) -> anyhow::Result<InsightsData> {
    let total_analyses = analyses.count().await?;
    let (average_overall_score, average_ats_score) = analyses.average_scores().await?;
    let average_feedback_score = feedback.average_score().await?;

    let field_distribution = analyses
        .field_distribution()
        .await?
        .into_iter()
        .map(|(key, count)| DistributionEntry { key, count })
        .collect();

    let level_distribution = analyses
        .level_distribution()
        .await?
        .into_iter()
        .map(|(key, count)| DistributionEntry { key, count })
        .collect();

    Ok(InsightsData {
        total_analyses,
        average_overall_score,
        average_ats_score,
        average_feedback_score,
        field_distribution,
        level_distribution,
    })
}
