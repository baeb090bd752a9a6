//! Career-field taxonomy and keyword classifier.

use crate::types::ResumeRecord;

/// Fixed enumeration order matters: ties are broken by the first field
/// reaching the maximum score.
pub const FIELD_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "data_science",
        &[
            "machine learning",
            "data science",
            "python",
            "r",
            "statistics",
            "analytics",
            "tensorflow",
            "pytorch",
            "pandas",
            "numpy",
        ],
    ),
    (
        "web_development",
        &[
            "javascript", "react", "angular", "vue", "node.js", "html", "css", "php", "django",
            "flask",
        ],
    ),
    (
        "mobile_development",
        &["android", "ios", "swift", "kotlin", "react native", "flutter", "xamarin"],
    ),
    (
        "devops",
        &["docker", "kubernetes", "aws", "azure", "jenkins", "terraform", "ansible"],
    ),
    (
        "cybersecurity",
        &["security", "penetration testing", "ethical hacking", "firewall", "encryption"],
    ),
    (
        "ui_ux_design",
        &["figma", "sketch", "adobe xd", "user experience", "user interface", "wireframe"],
    ),
    (
        "cloud_computing",
        &["aws", "azure", "gcp", "cloud architecture", "serverless"],
    ),
    (
        "blockchain",
        &["blockchain", "cryptocurrency", "smart contracts", "ethereum", "solidity"],
    ),
    (
        "ai_ml",
        &[
            "artificial intelligence",
            "machine learning",
            "deep learning",
            "neural networks",
            "nlp",
        ],
    ),
    (
        "game_development",
        &["unity", "unreal engine", "game design", "c#", "c++"],
    ),
    (
        "quality_assurance",
        &["testing", "automation testing", "selenium", "quality assurance", "test cases"],
    ),
    (
        "product_management",
        &["product management", "agile", "scrum", "roadmap", "stakeholder"],
    ),
    (
        "digital_marketing",
        &["seo", "sem", "social media marketing", "google analytics", "content marketing"],
    ),
    (
        "business_analysis",
        &[
            "business analysis",
            "requirements gathering",
            "process improvement",
            "stakeholder management",
        ],
    ),
    (
        "project_management",
        &["project management", "pmp", "agile", "scrum master", "waterfall"],
    ),
];

pub const GENERAL_FIELD: &str = "general";

/// Normalize a model-supplied field name against the taxonomy. Returns
/// `None` for anything that is not a legal tag so the caller reclassifies.
pub fn normalize_field_tag(raw: &str) -> Option<String> {
    let tag = raw
        .trim()
        .to_lowercase()
        .replace([' ', '-', '/'], "_");

    if tag == GENERAL_FIELD || FIELD_KEYWORDS.iter().any(|(field, _)| *field == tag) {
        Some(tag)
    } else {
        None
    }
}

/// Arg-max keyword classifier over the record's skills and experience text.
///
/// Matching is plain case-insensitive substring search, not word-boundary
/// search: the single-letter keyword "r" matches inside "research".
/// Switching to word boundaries would shift every score.
pub fn classify(record: &ResumeRecord) -> String {
    let mut blob = String::new();

    for skill in record.skills.iter_all() {
        blob.push(' ');
        blob.push_str(skill);
    }

    for entry in &record.experience {
        if let Some(description) = &entry.description {
            blob.push(' ');
            blob.push_str(description);
        }
        if let Some(position) = &entry.position {
            blob.push(' ');
            blob.push_str(position);
        }
    }

    let blob = blob.to_lowercase();

    let mut best_field = GENERAL_FIELD;
    let mut best_score = 0usize;

    for (field, keywords) in FIELD_KEYWORDS {
        let score = keywords.iter().filter(|kw| blob.contains(*kw)).count();
        if score > best_score {
            best_score = score;
            best_field = field;
        }
    }

    best_field.to_string()
}
