//! Request-scoped analysis pipeline: extract, analyze, recommend.
//!
//! One pipeline value is shared across requests but holds no per-request
//! state; each `run` works on its own inputs and returns a fresh bundle,
//! which the caller (web layer or CLI) is responsible for retaining.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::intelligence::{CareerIntelligence, Recommendations};
use crate::llm::ChatCompletion;
use crate::parser::ResumeParser;
use crate::types::{ResumeAnalysis, ResumeRecord};

/// Everything produced for one resume: the extracted record, the model
/// analysis and the derived recommendations, tagged with a session id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisBundle {
    pub session_id: String,
    pub record: ResumeRecord,
    pub analysis: ResumeAnalysis,
    pub recommendations: Recommendations,
}

pub struct AnalysisPipeline<C> {
    parser: ResumeParser<C>,
    intelligence: CareerIntelligence<C>,
}

impl<C: ChatCompletion + Clone> AnalysisPipeline<C> {
    pub fn new(
        client: C,
        extraction_model: impl Into<String>,
        analysis_model: impl Into<String>,
    ) -> Self {
        Self {
            parser: ResumeParser::new(client.clone(), extraction_model),
            intelligence: CareerIntelligence::new(client, analysis_model),
        }
    }

    /// Run the two model calls in sequence, then assemble recommendations.
    /// Each stage has its own degraded path, so this always completes.
    pub async fn run(&self, resume_text: &str, job_description: Option<&str>) -> AnalysisBundle {
        let session_id = Uuid::new_v4().to_string();
        info!(
            "Starting resume analysis (session: {}, {} words)",
            session_id,
            resume_text.split_whitespace().count()
        );

        let record = self.parser.extract(resume_text).await;
        let analysis = self.intelligence.analyze(&record, job_description).await;
        let recommendations = self.intelligence.recommend(&record, &analysis);

        info!(
            "Analysis finished (session: {}, field: {}, level: {}, score: {})",
            session_id,
            record.field_tag(),
            record.level(),
            analysis.overall_score
        );

        AnalysisBundle {
            session_id,
            record,
            analysis,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::llm::ChatRequest;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Returns queued responses in order; one queue shared across clones.
    #[derive(Clone)]
    struct ScriptedClient {
        responses: Arc<Mutex<VecDeque<Result<String, String>>>>,
    }

    impl ScriptedClient {
        fn new(responses: Vec<Result<&str, &str>>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(
                    responses
                        .into_iter()
                        .map(|r| r.map(str::to_string).map_err(str::to_string))
                        .collect(),
                )),
            }
        }
    }

    impl ChatCompletion for ScriptedClient {
        async fn complete(&self, _request: ChatRequest) -> Result<String, LlmError> {
            let next = self
                .responses
                .lock()
                .expect("responses lock")
                .pop_front()
                .expect("scripted response available");
            next.map_err(LlmError::Transport)
        }
    }

    const RESUME_TEXT: &str = "Jo Smith\njo@example.com\nSkills: javascript, react\nExperience";

    #[tokio::test]
    async fn full_run_produces_a_consistent_bundle() {
        let extraction = r#"{
            "name": "Jo Smith",
            "email": "jo@example.com",
            "skills": {"technical": ["javascript", "react", "css"]},
            "experience": [{"company": "Webco", "position": "Frontend Dev", "duration": "2 years"}]
        }"#;
        let analysis = r#"{"overall_score": 74, "ats_score": 68, "missing_skills": ["TypeScript"]}"#;

        let pipeline = AnalysisPipeline::new(
            ScriptedClient::new(vec![Ok(extraction), Ok(analysis)]),
            "extract-model",
            "analyze-model",
        );

        let bundle = pipeline.run(RESUME_TEXT, None).await;

        assert_eq!(bundle.record.primary_field.as_deref(), Some("web_development"));
        assert_eq!(bundle.analysis.overall_score, 74);
        assert_eq!(
            bundle.recommendations.skill_development[0],
            "Learn TypeScript to enhance your profile in web_development"
        );
        assert!(!bundle.session_id.is_empty());
    }

    #[tokio::test]
    async fn both_calls_failing_still_yields_a_bundle() {
        let pipeline = AnalysisPipeline::new(
            ScriptedClient::new(vec![Err("unreachable"), Err("unreachable")]),
            "extract-model",
            "analyze-model",
        );

        let bundle = pipeline.run(RESUME_TEXT, Some("React role")).await;

        assert_eq!(bundle.record.primary_field.as_deref(), Some("general"));
        assert_eq!(bundle.record.level().as_str(), "unknown");
        // Fallback record found the email by regex; fallback analysis
        // scores completeness from it.
        assert_eq!(bundle.record.contact_completeness, 25.0);
        assert_eq!(bundle.analysis.overall_score, 25);
        assert_eq!(bundle.recommendations.courses.len(), 10);
    }
}
