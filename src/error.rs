//! Typed errors for the extraction pipeline. Application seams use
//! `anyhow`; these cover the paths callers need to match on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    /// Network-level failure reaching the completion provider.
    #[error("completion transport failed: {0}")]
    Transport(String),
    /// The provider answered with a non-success status or an unusable body.
    #[error("completion provider returned status {status}: {message}")]
    Provider { status: u16, message: String },
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    /// Response text contained no `{`..`}` span.
    #[error("no JSON object found in model response")]
    MissingJson,
    #[error("model response contained malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TextExtractError {
    #[error("unsupported resume format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),
    #[error("resume file contained no extractable text")]
    Empty,
}
