//! Uploaded resume file to plain text.

use std::path::Path;

use tracing::info;

use crate::error::TextExtractError;

/// Extract analyzable text from an uploaded resume.
///
/// PDFs go through `pdf-extract`; plain-text formats are decoded lossily.
/// Layout (columns, tables, graphics) is not reconstructed. An empty
/// result is an error: the pipeline has nothing to work with.
pub fn extract_resume_text(file_name: &str, bytes: &[u8]) -> Result<String, TextExtractError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    let text = match extension.as_deref() {
        Some("pdf") => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| TextExtractError::Pdf(e.to_string()))?,
        Some("txt") | Some("text") | Some("md") => String::from_utf8_lossy(bytes).into_owned(),
        other => {
            return Err(TextExtractError::UnsupportedFormat(
                other.unwrap_or("no extension").to_string(),
            ))
        }
    };

    if text.trim().is_empty() {
        return Err(TextExtractError::Empty);
    }

    info!(
        "Extracted {} characters from {}",
        text.len(),
        file_name
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let text = extract_resume_text("resume.txt", "Jane Doe\nSkills: rust".as_bytes()).unwrap();
        assert!(text.contains("Jane Doe"));
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let err = extract_resume_text("resume.docx", b"PK...").unwrap_err();
        assert!(matches!(err, TextExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn empty_content_is_an_error() {
        let err = extract_resume_text("resume.txt", b"   \n ").unwrap_err();
        assert!(matches!(err, TextExtractError::Empty));
    }
}
