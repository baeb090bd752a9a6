//! Tolerant deserializers for model-supplied JSON.
//!
//! LLM responses routinely swap numbers for strings, null out arrays, or
//! return a single string where an array was requested. Every field of the
//! extracted record goes through one of these so that defaults are applied
//! in a single place and the rest of the crate sees clean types.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::resume::ExperienceLevel;
use crate::parser::taxonomy;

pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_string(&value))
}

pub fn vec_string<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_string_list(&value))
}

pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_u32(&value))
}

/// Score in [0, 100]; anything unusable becomes 0.
pub fn score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_u32(&value).unwrap_or(0).min(100))
}

/// Experience level as one of the five legal tags, or absent.
pub fn opt_level<'de, D>(deserializer: D) -> Result<Option<ExperienceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_string(&value).and_then(|s| ExperienceLevel::parse(&s)))
}

/// Primary field constrained to the taxonomy; illegal values count as
/// absent so the classifier recomputes them.
pub fn opt_field_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_string(&value).and_then(|s| taxonomy::normalize_field_tag(&s)))
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(coerce_string).collect(),
        Value::String(_) => coerce_string(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn coerce_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_u64() {
                Some(i.min(u32::MAX as u64) as u32)
            } else {
                n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u32)
            }
        }
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}
