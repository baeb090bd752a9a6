//! Canonical resume-section detection.

pub const SECTION_KEYWORDS: &[(&str, &[&str])] = &[
    ("summary", &["summary", "objective", "profile"]),
    ("experience", &["experience", "work history", "employment"]),
    ("education", &["education", "academic", "degree"]),
    ("skills", &["skills", "competencies", "technical skills"]),
    ("projects", &["projects", "portfolio"]),
    ("certifications", &["certifications", "certificates", "licenses"]),
    ("achievements", &["achievements", "accomplishments", "awards"]),
    ("interests", &["interests", "hobbies"]),
    ("references", &["references", "referees"]),
];

/// Section names whose keyword sets match anywhere in the text,
/// case-insensitively, in canonical order.
pub fn detect_sections(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    SECTION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(section, _)| section.to_string())
        .collect()
}
