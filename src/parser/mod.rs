//! Resume extraction pipeline: prompt the completion model for structured
//! JSON, recover the object from the response text, then locally derive
//! whatever the model left out.

pub mod contact;
pub mod duration;
pub mod level;
pub mod sections;
pub mod taxonomy;

use tracing::{info, warn};

use crate::error::ExtractionError;
use crate::llm::{json, ChatCompletion, ChatMessage, ChatRequest};
use crate::types::{ExperienceLevel, ResumeRecord};

pub const DEFAULT_EXTRACTION_MODEL: &str = "meta-llama/llama-3.1-8b-instruct";

const EXTRACTION_TEMPERATURE: f32 = 0.1;
const EXTRACTION_MAX_TOKENS: u32 = 2000;

const EXTRACTION_SYSTEM_PROMPT: &str = "You are an expert resume parser. Extract structured \
    information from resumes accurately and return valid JSON only.";

pub struct ResumeParser<C> {
    client: C,
    model: String,
}

impl<C: ChatCompletion> ResumeParser<C> {
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Extract a structured record from raw resume text.
    ///
    /// Never fails: any transport or parse error degrades to the regex-only
    /// fallback record so the caller always has something to render.
    pub async fn extract(&self, resume_text: &str) -> ResumeRecord {
        match self.try_extract(resume_text).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Resume extraction degraded to regex fallback: {}", e);
                fallback_record(resume_text)
            }
        }
    }

    /// Extraction with the failure surfaced, for callers that want to
    /// distinguish a degraded record from a real one.
    pub async fn try_extract(&self, resume_text: &str) -> Result<ResumeRecord, ExtractionError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(EXTRACTION_SYSTEM_PROMPT),
                ChatMessage::user(extraction_prompt(resume_text)),
            ],
            temperature: EXTRACTION_TEMPERATURE,
            max_tokens: EXTRACTION_MAX_TOKENS,
        };

        let response = self.client.complete(request).await?;

        let span = json::extract_object(&response).ok_or(ExtractionError::MissingJson)?;
        let record: ResumeRecord = serde_json::from_str(span)?;

        info!(
            "Extracted resume record ({} experience entries, {} education entries)",
            record.experience.len(),
            record.education.len()
        );

        Ok(enhance(record, resume_text))
    }
}

/// The JSON template the model is asked to fill.
fn extraction_prompt(resume_text: &str) -> String {
    format!(
        r#"Analyze the following resume text and extract detailed information in JSON format.

Resume Text:
{resume_text}

Extract the following information and return as valid JSON:
{{
    "name": "Full name of the person",
    "email": "Email address",
    "phone": "Phone number",
    "location": "Location/Address",
    "linkedin": "LinkedIn profile URL if mentioned",
    "github": "GitHub profile URL if mentioned",
    "summary": "Professional summary or objective",
    "experience": [
        {{
            "company": "Company name",
            "position": "Job title",
            "duration": "Employment duration",
            "description": "Job description",
            "achievements": ["List of achievements and accomplishments"]
        }}
    ],
    "education": [
        {{
            "institution": "Educational institution",
            "degree": "Degree type",
            "field": "Field of study",
            "year": "Graduation year",
            "gpa": "GPA if mentioned"
        }}
    ],
    "skills": {{
        "technical": ["List of technical skills"],
        "soft": ["List of soft skills"],
        "languages": ["Programming languages"],
        "frameworks": ["Frameworks and libraries"],
        "tools": ["Tools and software"]
    }},
    "projects": [
        {{
            "name": "Project name",
            "description": "Project description",
            "technologies": ["Technologies used"],
            "link": "Project link if available"
        }}
    ],
    "certifications": [
        {{
            "name": "Certification name",
            "issuer": "Issuing organization",
            "date": "Date obtained"
        }}
    ],
    "experience_level": "entry/junior/mid/senior/executive",
    "primary_field": "Most relevant career field",
    "years_of_experience": "Estimated years of experience as number"
}}

Be thorough and accurate. If information is not available, use null or empty arrays."#
    )
}

/// Backfill derived fields the model left absent, then overwrite the local
/// metrics unconditionally.
///
/// Order matters: the level estimate deliberately sees the model-supplied
/// years (absent counts as 0), not the total later derived from durations.
pub fn enhance(mut record: ResumeRecord, resume_text: &str) -> ResumeRecord {
    if record.primary_field.is_none() {
        record.primary_field = Some(taxonomy::classify(&record));
    }

    if record.experience_level.is_none() {
        let years = record.years_of_experience.unwrap_or(0);
        record.experience_level = Some(level::estimate_level(years, record.experience.len()));
    }

    if record.years_of_experience.unwrap_or(0) == 0 {
        let total_months: u32 = record
            .experience
            .iter()
            .map(|entry| duration::parse_duration(entry.duration.as_deref().unwrap_or("")))
            .fold(0, u32::saturating_add);
        record.years_of_experience = Some(total_months / 12);
    }

    record.resume_length = resume_text.split_whitespace().count();
    record.sections_present = sections::detect_sections(resume_text);
    record.contact_completeness = contact::contact_completeness(&record);

    record
}

/// Degraded record built from regex matches alone. Deliberately lossy: no
/// partial recovery of model output is attempted.
pub fn fallback_record(resume_text: &str) -> ResumeRecord {
    let mut record = ResumeRecord {
        email: contact::find_email(resume_text),
        phone: contact::find_phone(resume_text),
        experience_level: Some(ExperienceLevel::Unknown),
        primary_field: Some(taxonomy::GENERAL_FIELD.to_string()),
        years_of_experience: Some(0),
        resume_length: resume_text.split_whitespace().count(),
        ..Default::default()
    };
    record.contact_completeness = contact::contact_completeness(&record);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::llm::{ChatCompletion, ChatRequest};

    struct CannedClient {
        response: String,
    }

    impl ChatCompletion for CannedClient {
        async fn complete(&self, _request: ChatRequest) -> Result<String, LlmError> {
            Ok(self.response.clone())
        }
    }

    struct FailingClient;

    impl ChatCompletion for FailingClient {
        async fn complete(&self, _request: ChatRequest) -> Result<String, LlmError> {
            Err(LlmError::Transport("connection refused".to_string()))
        }
    }

    const RESUME_TEXT: &str = "Jane Doe\njane@example.com\n+41765550123\n\
        Skills: python, pandas\nExperience: Data Analyst at Acme";

    fn parser_with(response: &str) -> ResumeParser<CannedClient> {
        ResumeParser::new(
            CannedClient {
                response: response.to_string(),
            },
            DEFAULT_EXTRACTION_MODEL,
        )
    }

    #[tokio::test]
    async fn derived_fields_are_backfilled() {
        // Model response missing primary_field, experience_level and
        // years_of_experience but with usable skills/experience.
        let response = r#"Here you go:
        {
            "name": "Jane Doe",
            "email": "jane@example.com",
            "skills": {"technical": ["python", "pandas", "numpy"]},
            "experience": [
                {"company": "Acme", "position": "Data Analyst", "duration": "3 years"}
            ]
        }"#;

        let record = parser_with(response).extract(RESUME_TEXT).await;

        assert_eq!(record.primary_field.as_deref(), Some("data_science"));
        // years absent -> 0 at estimation time, one entry -> junior.
        assert_eq!(record.experience_level, Some(crate::types::ExperienceLevel::Junior));
        assert_eq!(record.years_of_experience, Some(3));
        assert_eq!(record.resume_length, RESUME_TEXT.split_whitespace().count());
        assert!(record.sections_present.contains(&"skills".to_string()));
        assert!(record.sections_present.contains(&"experience".to_string()));
        // name + email present in the parsed record.
        assert_eq!(record.contact_completeness, 50.0);
    }

    #[tokio::test]
    async fn metrics_overwrite_model_supplied_values() {
        let response = r#"{
            "name": "Jane Doe",
            "resume_length": 9999,
            "sections_present": ["made-up"],
            "contact_completeness": 100.0
        }"#;

        let record = parser_with(response).extract(RESUME_TEXT).await;

        assert_eq!(record.resume_length, RESUME_TEXT.split_whitespace().count());
        assert!(!record.sections_present.contains(&"made-up".to_string()));
        assert_eq!(record.contact_completeness, 25.0);
    }

    #[tokio::test]
    async fn transport_failure_degrades_to_fallback() {
        let parser = ResumeParser::new(FailingClient, DEFAULT_EXTRACTION_MODEL);
        let record = parser.extract(RESUME_TEXT).await;

        assert_eq!(record.experience_level, Some(ExperienceLevel::Unknown));
        assert_eq!(record.primary_field.as_deref(), Some("general"));
        assert_eq!(record.email.as_deref(), Some("jane@example.com"));
        assert_eq!(record.phone.as_deref(), Some("+41765550123"));
        // Two of four contact fields recovered by regex.
        assert_eq!(record.contact_completeness, 50.0);
        assert!(record.experience.is_empty());
        assert!(record.sections_present.is_empty());
    }

    #[tokio::test]
    async fn missing_json_is_a_typed_error() {
        let parser = parser_with("I could not process that resume, sorry.");
        let err = parser.try_extract(RESUME_TEXT).await.unwrap_err();
        assert!(matches!(err, ExtractionError::MissingJson));

        // Public path still yields a record.
        let record = parser.extract(RESUME_TEXT).await;
        assert_eq!(record.primary_field.as_deref(), Some("general"));
    }

    #[tokio::test]
    async fn malformed_json_is_a_typed_error() {
        let parser = parser_with("{\"name\": \"Jane\", }");
        let err = parser.try_extract(RESUME_TEXT).await.unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedJson(_)));
    }
}
