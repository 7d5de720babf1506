pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub fn clean_description(desc: &str) -> String {
    // Take first non-empty line
    let first_line = desc
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    // Remove markdown formatting for display
    let cleaned = first_line
        .trim()
        .replace("**", "")
        .replace('*', "")
        .replace('`', "")
        .replace('#', "");

    cleaned.trim().to_string()
}

/// A string field of an opaque API object, or an empty string.
pub fn str_field<'a>(value: &'a serde_json::Value, field: &str) -> &'a str {
    value.get(field).and_then(|v| v.as_str()).unwrap_or("")
}
