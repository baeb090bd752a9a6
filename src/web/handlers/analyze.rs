// src/web/handlers/analyze.rs
//! Resume upload and analysis handler

use crate::database::{AnalysisRepository, CandidateIdentity, DatabaseConfig};
use crate::error::TextExtractError;
use crate::extract_text::extract_resume_text;
use crate::pipeline::AnalysisBundle;
use crate::web::types::{AnalyzeUploadForm, DataResponse, PipelineState, StandardErrorResponse};

use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

const MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024;

pub async fn analyze_resume_handler(
    mut upload: Form<AnalyzeUploadForm<'_>>,
    pipeline: &State<PipelineState>,
    db_config: &State<DatabaseConfig>,
) -> Result<Json<DataResponse<AnalysisBundle>>, Json<StandardErrorResponse>> {
    let email = upload.email.trim().to_string();
    let name = upload.name.trim().to_string();
    let mobile = upload.mobile.trim().to_string();

    if name.is_empty() || email.is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Name and email are required".to_string(),
            "MISSING_IDENTITY".to_string(),
            vec![
                "Provide a 'name' form field".to_string(),
                "Provide an 'email' form field".to_string(),
            ],
        )));
    }

    info!("Resume analysis requested by {}", email);

    let file_size = upload.resume.len();
    if file_size > MAX_UPLOAD_SIZE {
        return Err(Json(StandardErrorResponse::new(
            "File size exceeds 10MB limit".to_string(),
            "FILE_TOO_LARGE".to_string(),
            vec![
                "Compress your resume file".to_string(),
                "Use a smaller file size (max 10MB)".to_string(),
            ],
        )));
    }

    let file_name = upload
        .resume
        .raw_name()
        .and_then(|n| n.as_str())
        .unwrap_or("resume.pdf")
        .to_string();

    let temp_path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));

    if let Err(e) = upload.resume.persist_to(&temp_path).await {
        error!("Failed to save uploaded file: {}", e);
        return Err(Json(StandardErrorResponse::new(
            "Failed to process uploaded file".to_string(),
            "FILE_SAVE_ERROR".to_string(),
            vec!["Try uploading the file again".to_string()],
        )));
    }

    let bytes = match tokio::fs::read(&temp_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read uploaded file: {}", e);
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(Json(StandardErrorResponse::new(
                "Failed to process uploaded file".to_string(),
                "FILE_READ_ERROR".to_string(),
                vec!["Try uploading the file again".to_string()],
            )));
        }
    };

    let _ = tokio::fs::remove_file(&temp_path).await;

    let resume_text = match extract_resume_text(&file_name, &bytes) {
        Ok(text) => text,
        Err(e) => {
            error!("Text extraction failed for {}: {}", file_name, e);
            let (message, code, suggestions) = match e {
                TextExtractError::UnsupportedFormat(ext) => (
                    format!("Unsupported file format: {}", ext),
                    "INVALID_FORMAT",
                    vec![
                        "Upload a PDF file (.pdf)".to_string(),
                        "Upload a plain-text file (.txt)".to_string(),
                    ],
                ),
                TextExtractError::Pdf(_) => (
                    "Could not read text from the PDF".to_string(),
                    "PDF_EXTRACT_ERROR",
                    vec![
                        "Ensure the PDF contains selectable text".to_string(),
                        "Scanned images are not supported".to_string(),
                    ],
                ),
                TextExtractError::Empty => (
                    "The uploaded file contains no readable text".to_string(),
                    "EMPTY_FILE",
                    vec!["Upload a resume with text content".to_string()],
                ),
            };
            return Err(Json(StandardErrorResponse::new(
                message,
                code.to_string(),
                suggestions,
            )));
        }
    };

    let job_description = upload
        .job_description
        .as_deref()
        .map(str::trim)
        .filter(|jd| !jd.is_empty());

    let bundle = pipeline.pipeline.run(&resume_text, job_description).await;

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

    let identity = CandidateIdentity {
        name,
        email: email.clone(),
        mobile,
    };

    let repository = AnalysisRepository::new(pool);
    if let Err(e) = repository.store(&identity, &bundle, job_description).await {
        // The analysis itself succeeded; log and return it anyway.
        error!("Failed to persist analysis for {}: {}", email, e);
    }

    info!(
        "Resume analysis served for {} (session: {}, score: {})",
        email, bundle.session_id, bundle.analysis.overall_score
    );

    Ok(Json(DataResponse::success(
        "Resume analyzed successfully".to_string(),
        bundle,
    )))
}
