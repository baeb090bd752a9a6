// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::config::ConfigManager;
use crate::database::DatabaseConfig;
use crate::intelligence::CareerAssistant;
use crate::llm::OpenRouterClient;
use crate::pipeline::{AnalysisBundle, AnalysisPipeline};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::{error, info};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[post("/analyze", data = "<upload>")]
pub async fn analyze_resume(
    upload: Form<AnalyzeUploadForm<'_>>,
    pipeline: &State<PipelineState>,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<DataResponse<AnalysisBundle>>, Json<StandardErrorResponse>> {
    handlers::analyze_resume_handler(upload, pipeline, db_config).await
}

#[post("/assistant", data = "<request>")]
pub async fn assistant(
    request: Json<AssistantRequest>,
    pipeline: &State<PipelineState>,
) -> Result<Json<DataResponse<AssistantReply>>, Json<StandardErrorResponse>> {
    handlers::assistant_handler(request, pipeline).await
}

#[post("/feedback", data = "<request>")]
pub async fn submit_feedback(
    request: Json<FeedbackRequest>,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    handlers::submit_feedback_handler(request, db_config).await
}

#[get("/feedback?<limit>")]
pub async fn list_feedback(
    limit: Option<i64>,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<DataResponse<Vec<crate::database::StoredFeedback>>>, Json<StandardErrorResponse>> {
    handlers::list_feedback_handler(limit, db_config).await
}

#[get("/insights")]
pub async fn insights(
    db_config: &State<DatabaseConfig>,
) -> Result<Json<DataResponse<InsightsData>>, Json<StandardErrorResponse>> {
    handlers::insights_handler(db_config).await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    config.ensure_directories().await?;

    let client = OpenRouterClient::new(
        config.llm.base_url.clone(),
        config.llm.api_key.clone(),
        Some(config.llm.timeout_seconds),
    )?;

    let pipeline_state = PipelineState {
        pipeline: AnalysisPipeline::new(
            client.clone(),
            config.llm.extraction_model.clone(),
            config.llm.analysis_model.clone(),
        ),
        assistant: CareerAssistant::new(client, config.llm.assistant_model.clone()),
    };

    let mut db_config = DatabaseConfig::new(config.environment.database_path.clone());

    if let Err(e) = db_config.init_pool().await {
        error!("Failed to initialize database: {}", e);
        return Err(e);
    }

    if let Err(e) = db_config.migrate().await {
        error!("Failed to run database migrations: {}", e);
        return Err(e);
    }

    info!("Starting resume analyzer API server");
    info!("Database: {}", db_config.database_path.display());
    info!(
        "Models: extraction={}, analysis={}",
        config.llm.extraction_model, config.llm.analysis_model
    );

    let figment = rocket::Config::figment().merge(("port", config.environment.port));

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(pipeline_state)
        .manage(db_config)
        .register("/api", catchers![bad_request, internal_error])
        .mount(
            "/api",
            routes![
                analyze_resume,
                assistant,
                submit_feedback,
                list_feedback,
                insights,
                health,
                options,
            ],
        )
        .launch()
        .await;

    Ok(())
}
