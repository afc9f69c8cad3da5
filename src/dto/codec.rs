//! Text encoding for list-valued columns (services, file formats).
//!
//! Lists are stored as a JSON array in a single text column. Order is preserved.

pub fn encode_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Blank text decodes to an empty list. Text that is not a JSON string array is
/// read as comma-separated values.
pub fn decode_list(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Option<Vec<String>>>(trimmed) {
        Ok(items) => items.unwrap_or_default(),
        Err(_) => trimmed
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    }
}
