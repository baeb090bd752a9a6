//! Contact-field scoring and regex fallback extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::ResumeRecord;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

// Loose digit run, optionally prefixed. Intentionally permissive: any
// 7-15 digit sequence counts as a phone candidate.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[1-9]?[0-9]{7,15}").expect("valid phone regex"));

const CONTACT_FIELD_COUNT: usize = 4;

/// Percentage of the four required contact fields that are present.
/// Presence is a non-empty value; no validity check is applied, so a
/// malformed email still counts.
pub fn contact_completeness(record: &ResumeRecord) -> f64 {
    let fields = [&record.name, &record.email, &record.phone, &record.location];
    let present = fields
        .iter()
        .filter(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
        .count();

    (present as f64 / CONTACT_FIELD_COUNT as f64) * 100.0
}

pub fn find_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn find_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_the_fields_scores_fifty() {
        let record = ResumeRecord {
            name: Some("Grace Hopper".to_string()),
            email: Some("grace@navy.mil".to_string()),
            ..Default::default()
        };
        assert_eq!(contact_completeness(&record), 50.0);
    }

    #[test]
    fn malformed_but_present_values_still_count() {
        let record = ResumeRecord {
            name: Some("x".to_string()),
            email: Some("not-an-email".to_string()),
            phone: Some("123".to_string()),
            location: Some("Somewhere".to_string()),
            ..Default::default()
        };
        assert_eq!(contact_completeness(&record), 100.0);
    }

    #[test]
    fn empty_record_scores_zero() {
        assert_eq!(contact_completeness(&ResumeRecord::default()), 0.0);
    }

    #[test]
    fn finds_email_in_free_text() {
        let text = "Reach me at jane.doe+cv@example.co.uk or on my cell.";
        assert_eq!(find_email(text), Some("jane.doe+cv@example.co.uk".to_string()));
        assert_eq!(find_email("no address here"), None);
    }

    #[test]
    fn finds_loose_phone_digits() {
        assert_eq!(find_phone("call +41765550123 today"), Some("+41765550123".to_string()));
        assert_eq!(find_phone("short 123"), None);
    }
}
