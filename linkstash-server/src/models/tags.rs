//! Tag list storage encoding
//!
//! Tags live in a TEXT column as a JSON array of strings. Reading back
//! always yields a list: a NULL or empty column is the empty list.

/// Serialize tags for storage.
pub fn encode(tags: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tags)
}

/// Materialize a stored tags column.
pub fn decode(stored: Option<&str>) -> Result<Vec<String>, serde_json::Error> {
    match stored {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => Ok(serde_json::from_str::<Option<Vec<String>>>(s)?.unwrap_or_default()),
    }
}
