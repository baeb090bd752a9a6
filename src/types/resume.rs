//! Structured resume data extracted from free text.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Ordinal career level. `Unknown` only appears on the degraded fallback
/// path when extraction failed outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Executive,
    Unknown,
}

impl ExperienceLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "entry" => Some(Self::Entry),
            "junior" => Some(Self::Junior),
            "mid" => Some(Self::Mid),
            "senior" => Some(Self::Senior),
            "executive" => Some(Self::Executive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Executive => "executive",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical extraction output. Deserialization is deliberately forgiving:
/// every field tolerates null, wrong scalar types, or absence, so a sloppy
/// model response still yields a well-formed record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default, deserialize_with = "lenient::opt_level")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default, deserialize_with = "lenient::opt_field_tag")]
    pub primary_field: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub years_of_experience: Option<u32>,
    // Derived locally after extraction; anything the model returns for
    // these is ignored rather than parsed.
    #[serde(skip_deserializing)]
    pub resume_length: usize,
    #[serde(skip_deserializing)]
    pub sections_present: Vec<String>,
    #[serde(skip_deserializing)]
    pub contact_completeness: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::vec_string")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub gpa: Option<String>,
}

/// All five categories are always present, even when empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default, deserialize_with = "lenient::vec_string")]
    pub technical: Vec<String>,
    #[serde(default, deserialize_with = "lenient::vec_string")]
    pub soft: Vec<String>,
    #[serde(default, deserialize_with = "lenient::vec_string")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "lenient::vec_string")]
    pub frameworks: Vec<String>,
    #[serde(default, deserialize_with = "lenient::vec_string")]
    pub tools: Vec<String>,
}

impl SkillSet {
    pub fn iter_all(&self) -> impl Iterator<Item = &String> {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .chain(self.languages.iter())
            .chain(self.frameworks.iter())
            .chain(self.tools.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.iter_all().next().is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::vec_string")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationEntry {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub issuer: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub date: Option<String>,
}

impl ResumeRecord {
    /// Field tag for display and lookups; `general` until classified.
    pub fn field_tag(&self) -> &str {
        self.primary_field.as_deref().unwrap_or("general")
    }

    /// Field tag with underscores replaced for human-readable text.
    pub fn field_label(&self) -> String {
        self.field_tag().replace('_', " ")
    }

    pub fn level(&self) -> ExperienceLevel {
        self.experience_level.unwrap_or(ExperienceLevel::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sloppy_model_json_still_deserializes() {
        let raw = r#"{
            "name": "Ada Lovelace",
            "email": null,
            "phone": 41765550123,
            "skills": {"technical": ["python", 42, null], "soft": null},
            "experience": [{"company": "Analytical Engines", "achievements": "shipped it"}],
            "experience_level": "Mid-Senior level",
            "primary_field": "Data Science",
            "years_of_experience": "6"
        }"#;

        let record: ResumeRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(record.email, None);
        assert_eq!(record.phone.as_deref(), Some("41765550123"));
        assert_eq!(record.skills.technical, vec!["python".to_string(), "42".to_string()]);
        assert!(record.skills.soft.is_empty());
        assert_eq!(record.experience[0].achievements, vec!["shipped it".to_string()]);
        // Illegal level strings count as absent so the estimator recomputes.
        assert_eq!(record.experience_level, None);
        // Field tags are normalized against the taxonomy.
        assert_eq!(record.primary_field.as_deref(), Some("data_science"));
        assert_eq!(record.years_of_experience, Some(6));
    }

    #[test]
    fn string_typed_metrics_never_poison_the_parse() {
        // Models sometimes echo the derived metrics back as prose. They
        // are recomputed locally, so the parse must shrug them off.
        let raw = r#"{
            "name": "Ada Lovelace",
            "resume_length": "350 words",
            "sections_present": "skills and experience",
            "contact_completeness": "75%"
        }"#;

        let record: ResumeRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(record.resume_length, 0);
        assert!(record.sections_present.is_empty());
        assert_eq!(record.contact_completeness, 0.0);
    }

    #[test]
    fn skill_categories_always_serialize() {
        let record = ResumeRecord::default();
        let json = serde_json::to_value(&record).unwrap();
        for category in ["technical", "soft", "languages", "frameworks", "tools"] {
            assert!(json["skills"][category].is_array(), "missing {category}");
        }
    }
}
