//! Employment-duration parsing.

use regex::Regex;
use std::sync::LazyLock;

static YEARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*year").expect("valid years regex"));
static MONTHS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*month").expect("valid months regex"));

/// Total months described by a free-text duration like "3 years 2 months".
///
/// When neither pattern matches (including empty input) the result is 12:
/// an unparseable entry still represents a held position, and a zero would
/// erase that tenure from the aggregate years-of-experience total. No upper
/// bound is enforced.
pub fn parse_duration(duration: &str) -> u32 {
    let lowered = duration.to_lowercase();
    let mut months: u32 = 0;

    if let Some(caps) = YEARS_RE.captures(&lowered) {
        let years: u32 = caps[1].parse().unwrap_or(u32::MAX);
        months = months.saturating_add(years.saturating_mul(12));
    }

    if let Some(caps) = MONTHS_RE.captures(&lowered) {
        months = months.saturating_add(caps[1].parse().unwrap_or(u32::MAX));
    }

    if months == 0 {
        12
    } else {
        months
    }
}

#[cfg(test)]
mod tests {
    use super::parse_duration;

    #[test]
    fn combines_years_and_months() {
        assert_eq!(parse_duration("3 years 2 months"), 38);
        assert_eq!(parse_duration("1 year"), 12);
        assert_eq!(parse_duration("14 months"), 14);
    }

    #[test]
    fn is_case_insensitive_and_tolerates_spacing() {
        assert_eq!(parse_duration("2 Years, 6 Months"), 30);
        assert_eq!(parse_duration("5years"), 60);
    }

    #[test]
    fn unparseable_input_defaults_to_a_year() {
        assert_eq!(parse_duration(""), 12);
        assert_eq!(parse_duration("senior role"), 12);
        assert_eq!(parse_duration("Jan 2020 - Present"), 12);
    }

    #[test]
    fn pathological_values_pass_through_unclamped() {
        assert_eq!(parse_duration("999 years"), 999 * 12);
    }
}
