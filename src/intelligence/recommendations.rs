//! Deterministic recommendation assembly from the record, the analysis and
//! the static catalog. Pure functions: no I/O, no randomness.

use serde::{Deserialize, Serialize};

use super::catalog;
use crate::types::{ExperienceLevel, ResumeAnalysis, ResumeRecord};

const MAX_COURSES: usize = 10;
const MAX_MISSING_SKILLS: usize = 5;
const MAX_CAREER_MOVES: usize = 5;
const MAX_TARGET_ROLES: usize = 3;
const MAX_CERTIFICATIONS: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub courses: Vec<Course>,
    pub skill_development: Vec<String>,
    pub career_moves: Vec<String>,
    pub networking: Vec<String>,
    pub certifications: Vec<String>,
}

pub fn generate(record: &ResumeRecord, analysis: &ResumeAnalysis) -> Recommendations {
    Recommendations {
        courses: field_courses(record),
        skill_development: skill_development(record, analysis),
        career_moves: career_moves(record),
        networking: networking_strategies(record),
        certifications: certifications(record),
    }
}

fn field_courses(record: &ResumeRecord) -> Vec<Course> {
    catalog::courses_for_field(record.field_tag())
        .into_iter()
        .take(MAX_COURSES)
        .map(|(title, url)| Course {
            title: title.to_string(),
            url: url.to_string(),
        })
        .collect()
}

fn skill_development(record: &ResumeRecord, analysis: &ResumeAnalysis) -> Vec<String> {
    let mut suggestions: Vec<String> = analysis
        .missing_skills
        .iter()
        .take(MAX_MISSING_SKILLS)
        .map(|skill| {
            format!(
                "Learn {} to enhance your profile in {}",
                skill,
                record.field_tag()
            )
        })
        .collect();

    // Executive (and unknown) levels get no generic additions.
    match record.level() {
        ExperienceLevel::Entry | ExperienceLevel::Junior => {
            suggestions.extend([
                "Focus on building a strong portfolio with 3-5 projects".to_string(),
                "Contribute to open-source projects to gain visibility".to_string(),
                "Obtain relevant certifications in your field".to_string(),
            ]);
        }
        ExperienceLevel::Mid | ExperienceLevel::Senior => {
            suggestions.extend([
                "Develop leadership and mentoring skills".to_string(),
                "Learn emerging technologies in your field".to_string(),
                "Consider specializing in a niche area".to_string(),
            ]);
        }
        ExperienceLevel::Executive | ExperienceLevel::Unknown => {}
    }

    suggestions
}

fn career_moves(record: &ResumeRecord) -> Vec<String> {
    let mut moves = Vec::new();

    if let Some(next) = catalog::next_level(record.level().as_str()) {
        for role in catalog::roles_for_level(next).iter().take(MAX_TARGET_ROLES) {
            moves.push(format!("Target {} positions in the next 1-2 years", role));
        }
    }

    match record.field_tag() {
        "data_science" => moves.extend([
            "Consider specializing in MLOps or AI Engineering".to_string(),
            "Explore opportunities in AI product management".to_string(),
            "Look into data science consulting roles".to_string(),
        ]),
        "web_development" => moves.extend([
            "Transition to full-stack architecture roles".to_string(),
            "Explore DevOps and cloud engineering".to_string(),
            "Consider technical product management".to_string(),
        ]),
        _ => {}
    }

    moves.truncate(MAX_CAREER_MOVES);
    moves
}

fn networking_strategies(record: &ResumeRecord) -> Vec<String> {
    vec![
        format!("Join professional associations in {}", record.field_label()),
        "Attend industry conferences and meetups".to_string(),
        "Engage actively on LinkedIn with industry content".to_string(),
        "Participate in online communities and forums".to_string(),
        "Consider mentoring junior professionals".to_string(),
    ]
}

fn certifications(record: &ResumeRecord) -> Vec<String> {
    catalog::certifications_for_field(record.field_tag())
        .iter()
        .take(MAX_CERTIFICATIONS)
        .map(|cert| cert.to_string())
        .collect()
}
