//! JSON-object recovery from free-form model output.

/// Return the substring spanning the first `{` through the last `}`.
///
/// Models wrap their JSON in prose or markdown fences; the span between
/// the outermost braces is what we attempt to parse. Whether the span is
/// actually valid JSON is the caller's problem.
pub fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::extract_object;

    #[test]
    fn strips_surrounding_prose_and_fences() {
        let response = "Sure! Here is the data:\n```json\n{\"name\": \"Ada\"}\n```\nLet me know.";
        assert_eq!(extract_object(response), Some("{\"name\": \"Ada\"}"));
    }

    #[test]
    fn spans_outermost_braces() {
        let response = "{\"a\": {\"b\": 1}} trailing";
        assert_eq!(extract_object(response), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn rejects_text_without_an_object() {
        assert_eq!(extract_object("no json here"), None);
        assert_eq!(extract_object("} reversed {"), None);
        assert_eq!(extract_object(""), None);
    }
}
