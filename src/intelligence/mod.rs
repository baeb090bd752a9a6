//! Career intelligence: the scoring/insight model call and the
//! deterministic recommendation generator.

pub mod assistant;
pub mod catalog;
pub mod recommendations;

pub use assistant::CareerAssistant;
pub use recommendations::{Course, Recommendations};

use tracing::{info, warn};

use crate::llm::{json, ChatCompletion, ChatMessage, ChatRequest};
use crate::types::{ResumeAnalysis, ResumeRecord};

pub const DEFAULT_ANALYSIS_MODEL: &str = "deepseek/deepseek-chat";

const ANALYSIS_TEMPERATURE: f32 = 0.3;
const ANALYSIS_MAX_TOKENS: u32 = 2500;

const ANALYSIS_SYSTEM_PROMPT: &str = "You are an expert career counselor and resume analyst \
    with 20+ years of experience. Provide detailed, actionable insights about resumes and \
    career development.";

pub struct CareerIntelligence<C> {
    client: C,
    model: String,
}

impl<C: ChatCompletion> CareerIntelligence<C> {
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Score the record against an optional target job description.
    ///
    /// Like extraction, this never fails: if the model call or its JSON is
    /// unusable, a deterministic completeness-based analysis is substituted.
    pub async fn analyze(
        &self,
        record: &ResumeRecord,
        job_description: Option<&str>,
    ) -> ResumeAnalysis {
        match self.try_analyze(record, job_description).await {
            Ok(analysis) => {
                info!(
                    "Resume analysis complete (overall: {}, ats: {})",
                    analysis.overall_score, analysis.ats_score
                );
                analysis
            }
            Err(e) => {
                warn!("Resume analysis degraded to static fallback: {}", e);
                ResumeAnalysis::fallback_for(record)
            }
        }
    }

    async fn try_analyze(
        &self,
        record: &ResumeRecord,
        job_description: Option<&str>,
    ) -> Result<ResumeAnalysis, crate::error::ExtractionError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(ANALYSIS_SYSTEM_PROMPT),
                ChatMessage::user(analysis_prompt(record, job_description)?),
            ],
            temperature: ANALYSIS_TEMPERATURE,
            max_tokens: ANALYSIS_MAX_TOKENS,
        };

        let response = self.client.complete(request).await?;

        let span =
            json::extract_object(&response).ok_or(crate::error::ExtractionError::MissingJson)?;
        Ok(serde_json::from_str(span)?)
    }

    /// Assemble course/skill/career recommendations. Pure lookup over the
    /// static catalog; see [`recommendations`].
    pub fn recommend(&self, record: &ResumeRecord, analysis: &ResumeAnalysis) -> Recommendations {
        recommendations::generate(record, analysis)
    }
}

fn analysis_prompt(
    record: &ResumeRecord,
    job_description: Option<&str>,
) -> Result<String, crate::error::ExtractionError> {
    let record_json = serde_json::to_string_pretty(record)?;
    let job_context = job_description
        .filter(|jd| !jd.trim().is_empty())
        .map(|jd| format!("Target Job Description: {jd}\n"))
        .unwrap_or_default();

    Ok(format!(
        r#"Perform a comprehensive analysis of this resume data and provide detailed insights.

Resume Data: {record_json}

{job_context}
Provide analysis in the following JSON format:
{{
    "overall_score": "Score out of 100 based on completeness, quality, and relevance",
    "ats_score": "ATS compatibility score out of 100",
    "strengths": ["List of candidate's key strengths"],
    "improvement_areas": [
        {{
            "area": "Area needing improvement",
            "priority": "high/medium/low",
            "suggestion": "Specific suggestion for improvement"
        }}
    ],
    "missing_skills": ["Skills that should be added based on field/target role"],
    "content_quality": {{
        "writing_quality": "Score out of 100",
        "quantifiable_achievements": "Number of quantifiable achievements found",
        "action_verbs_usage": "Quality of action verbs used"
    }},
    "market_insights": {{
        "demand_score": "Market demand for this profile (0-100)",
        "salary_range": "Expected salary range",
        "competition_level": "Low/Medium/High",
        "growth_potential": "Career growth potential (0-100)"
    }},
    "recommendations": ["Specific actionable recommendations"],
    "career_trajectory": {{
        "current_level": "Assessment of current career level",
        "next_steps": ["Suggested next career moves"],
        "timeline": "Suggested timeline for career advancement"
    }}
}}

Be thorough, specific, and provide actionable insights."#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;

    struct CannedClient(String);

    impl ChatCompletion for CannedClient {
        async fn complete(&self, _request: ChatRequest) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    struct FailingClient;

    impl ChatCompletion for FailingClient {
        async fn complete(&self, _request: ChatRequest) -> Result<String, LlmError> {
            Err(LlmError::Transport("timed out".to_string()))
        }
    }

    #[tokio::test]
    async fn parses_analysis_with_string_scores() {
        let engine = CareerIntelligence::new(
            CannedClient(
                r#"Analysis below.
                {"overall_score": "82", "ats_score": 75, "missing_skills": ["Docker"],
                 "strengths": ["Strong Python background"]}"#
                    .to_string(),
            ),
            DEFAULT_ANALYSIS_MODEL,
        );

        let analysis = engine.analyze(&ResumeRecord::default(), None).await;
        assert_eq!(analysis.overall_score, 82);
        assert_eq!(analysis.ats_score, 75);
        assert_eq!(analysis.missing_skills, vec!["Docker".to_string()]);
    }

    #[tokio::test]
    async fn failure_substitutes_completeness_fallback() {
        let engine = CareerIntelligence::new(FailingClient, DEFAULT_ANALYSIS_MODEL);

        let mut record = ResumeRecord::default();
        record.sections_present = vec!["skills".into(), "experience".into()];
        record.contact_completeness = 50.0;

        let analysis = engine.analyze(&record, Some("Platform engineer role")).await;
        assert_eq!(analysis.overall_score, 70); // 2 * 10 + 50
        assert_eq!(analysis.ats_score, 70);
        assert!(!analysis.missing_skills.is_empty());
    }
}
