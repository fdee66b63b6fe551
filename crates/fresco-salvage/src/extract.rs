//! Multi-strategy JSON extraction from free-form model output

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Maximum characters of unparsable input quoted in diagnostics
const PREVIEW_LIMIT: usize = 200;

static RE_JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap());

static RE_ANY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\s*(.*?)\s*```").unwrap());

// One level of nesting tolerance. Deeper structures are matched at their
// innermost balanced span, and JSON strings containing unbalanced brace or
// bracket characters will be mis-sliced; both are inherent limits of regex
// scavenging and are accepted here - the earlier strategies handle
// well-formed responses before these run.
static RE_BRACE_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}]*(?:\{[^{}]*\}[^{}]*)*\}").unwrap());

static RE_BRACKET_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\[\]]*(?:\[[^\[\]]*\][^\[\]]*)*\]").unwrap());

/// Extract the best JSON candidate from a model response
///
/// Tries an ordered cascade of strategies and returns the first value that
/// parses, or `None` when every strategy fails:
///
/// 1. The whole trimmed response
/// 2. Each ```` ```json ````-tagged fenced block, in order of appearance
/// 3. Each generic fenced block
/// 4. Balanced-brace object literals found by regex scan
/// 5. Balanced-bracket array literals found by regex scan
///
/// Malformed input is never an error. Total failure logs a truncated
/// preview of the response and returns `None`.
pub fn extract_json(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        warn!("Response is empty, nothing to extract");
        return None;
    }

    // 1: the response is already pure JSON
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    // 2: first parsable ```json block. An invalid first block does not end
    // the strategy; later blocks are still tried.
    for caps in RE_JSON_FENCE.captures_iter(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(caps[1].trim()) {
            debug!("Recovered JSON from tagged fenced block");
            return Some(value);
        }
    }

    // 3: first parsable generic fenced block
    for caps in RE_ANY_FENCE.captures_iter(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(caps[1].trim()) {
            debug!("Recovered JSON from untagged fenced block");
            return Some(value);
        }
    }

    // 4: object literals scavenged by regex, left to right
    for m in RE_BRACE_OBJECT.find_iter(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(m.as_str()) {
            debug!("Recovered JSON object by brace scan");
            return Some(value);
        }
    }

    // 5: array literals scavenged by regex
    for m in RE_BRACKET_ARRAY.find_iter(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(m.as_str()) {
            debug!("Recovered JSON array by bracket scan");
            return Some(value);
        }
    }

    warn!(
        "JSON extraction failed, response preview: {}...",
        preview(trimmed)
    );
    None
}

/// Extract JSON, substituting `fallback` on total failure
///
/// The fallback substitution is logged so pipeline runs that degraded to
/// defaults can be spotted afterwards.
pub fn extract_json_or(text: &str, fallback: Option<Value>) -> Option<Value> {
    match extract_json(text) {
        Some(value) => Some(value),
        None => {
            warn!("JSON extraction failed, using fallback value: {:?}", fallback);
            fallback
        }
    }
}

/// Truncate to at most `PREVIEW_LIMIT` characters, on a char boundary
fn preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_LIMIT) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
