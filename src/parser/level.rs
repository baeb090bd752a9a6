//! Experience-level estimation from years and entry count.

use crate::types::ExperienceLevel;

/// Threshold table, evaluated top to bottom, first match wins.
///
/// Either condition alone selects a tier, and the years branch of a tier
/// is checked before any later tier: a candidate with 0 years and six
/// listed positions is still `junior`. Changing the branch order changes
/// outcomes for edge inputs.
pub fn estimate_level(years: u32, experience_entries: usize) -> ExperienceLevel {
    if years == 0 && experience_entries == 0 {
        ExperienceLevel::Entry
    } else if years <= 2 || experience_entries <= 1 {
        ExperienceLevel::Junior
    } else if years <= 5 || experience_entries <= 3 {
        ExperienceLevel::Mid
    } else if years <= 10 || experience_entries <= 5 {
        ExperienceLevel::Senior
    } else {
        ExperienceLevel::Executive
    }
}

#[cfg(test)]
mod tests {
    use super::estimate_level;
    use crate::types::ExperienceLevel::*;

    #[test]
    fn blank_history_is_entry() {
        assert_eq!(estimate_level(0, 0), Entry);
    }

    #[test]
    fn zero_years_with_many_entries_stays_junior() {
        // years <= 2 matches before entry counts are consulted at any
        // later tier.
        assert_eq!(estimate_level(0, 6), Junior);
    }

    #[test]
    fn either_condition_selects_a_tier() {
        assert_eq!(estimate_level(4, 10), Mid); // years <= 5
        assert_eq!(estimate_level(20, 1), Junior); // entries <= 1
        assert_eq!(estimate_level(8, 4), Senior); // years <= 10
        assert_eq!(estimate_level(12, 5), Senior); // entries <= 5
    }

    #[test]
    fn beyond_all_thresholds_is_executive() {
        assert_eq!(estimate_level(12, 6), Executive);
        assert_eq!(estimate_level(30, 12), Executive);
    }

    #[test]
    fn twelve_years_one_entry_is_junior_not_executive() {
        // Documented non-monotonic corner of the OR-coupled table.
        assert_eq!(estimate_level(12, 1), Junior);
    }
}
