//! Analysis output produced by the career intelligence model call.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::resume::ResumeRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    #[serde(default, deserialize_with = "lenient::score")]
    pub overall_score: u32,
    #[serde(default, deserialize_with = "lenient::score")]
    pub ats_score: u32,
    #[serde(default, deserialize_with = "lenient::vec_string")]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvement_areas: Vec<ImprovementArea>,
    #[serde(default, deserialize_with = "lenient::vec_string")]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub content_quality: ContentQuality,
    #[serde(default)]
    pub market_insights: MarketInsights,
    #[serde(default, deserialize_with = "lenient::vec_string")]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub career_trajectory: CareerTrajectory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImprovementArea {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub area: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentQuality {
    #[serde(default, deserialize_with = "lenient::score")]
    pub writing_quality: u32,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub quantifiable_achievements: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub action_verbs_usage: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketInsights {
    #[serde(default, deserialize_with = "lenient::score")]
    pub demand_score: u32,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub salary_range: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub competition_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::score")]
    pub growth_potential: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareerTrajectory {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub current_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::vec_string")]
    pub next_steps: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub timeline: Option<String>,
}

impl ResumeAnalysis {
    /// Deterministic substitute when the analysis model is unreachable.
    /// Scores completeness only: ten points per detected section plus the
    /// contact percentage, capped at 100.
    pub fn fallback_for(record: &ResumeRecord) -> Self {
        let overall =
            ((record.sections_present.len() as f64 * 10.0) + record.contact_completeness).min(100.0);

        Self {
            overall_score: overall as u32,
            ats_score: 70,
            strengths: vec![
                "Profile shows relevant experience".to_string(),
                "Good educational background".to_string(),
            ],
            improvement_areas: vec![ImprovementArea {
                area: Some("Resume completeness".to_string()),
                priority: Some("high".to_string()),
                suggestion: Some(
                    "Add missing sections like summary, skills, or projects".to_string(),
                ),
            }],
            missing_skills: vec![
                "Communication".to_string(),
                "Leadership".to_string(),
                "Problem Solving".to_string(),
            ],
            content_quality: ContentQuality {
                writing_quality: 75,
                quantifiable_achievements: Some(2),
                action_verbs_usage: Some("Good".to_string()),
            },
            market_insights: MarketInsights {
                demand_score: 70,
                salary_range: Some("Competitive".to_string()),
                competition_level: Some("Medium".to_string()),
                growth_potential: 75,
            },
            recommendations: vec![
                "Add a professional summary".to_string(),
                "Include more quantifiable achievements".to_string(),
                "Update skills section with current technologies".to_string(),
            ],
            career_trajectory: CareerTrajectory {
                current_level: Some(record.level().as_str().to_string()),
                next_steps: vec![
                    "Gain more experience".to_string(),
                    "Develop new skills".to_string(),
                ],
                timeline: Some("1-2 years for next career move".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_score_is_capped() {
        let mut record = ResumeRecord::default();
        record.sections_present = vec![
            "summary".into(),
            "experience".into(),
            "education".into(),
            "skills".into(),
            "projects".into(),
            "certifications".into(),
        ];
        record.contact_completeness = 100.0;

        let analysis = ResumeAnalysis::fallback_for(&record);
        assert_eq!(analysis.overall_score, 100);
        assert_eq!(analysis.ats_score, 70);
    }

    #[test]
    fn fallback_echoes_unknown_level() {
        let analysis = ResumeAnalysis::fallback_for(&ResumeRecord::default());
        assert_eq!(analysis.career_trajectory.current_level.as_deref(), Some("unknown"));
        // Empty record: no sections, no contact info.
        assert_eq!(analysis.overall_score, 0);
    }
}
