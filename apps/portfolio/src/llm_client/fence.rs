//! Extraction of JSON payloads that the model may wrap in a markdown fence.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FenceError {
    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Matches a ```json fence only when it wraps the entire (trimmed) input.
fn fence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)^```json\s*(.*?)\s*```$").expect("fence pattern is a valid regex")
    })
}

/// Returns the slice of `raw` that should be handed to the JSON parser.
///
/// Text that is not fully enclosed by a ```json fence is returned whole,
/// trimmed. A bare ``` fence without the `json` tag is not stripped.
pub fn strip_json_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match fence_pattern().captures(trimmed).and_then(|c| c.get(1)) {
        Some(interior) => interior.as_str(),
        None => trimmed,
    }
}

/// Parses model output as JSON, unwrapping a surrounding ```json fence if present.
pub fn extract_json(raw: &str) -> Result<Value, FenceError> {
    Ok(serde_json::from_str(strip_json_fence(raw))?)
}
