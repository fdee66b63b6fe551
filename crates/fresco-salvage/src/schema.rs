//! Pass/fail schema gates for the two payload families
//!
//! These predicates check shape only - they never repair. Callers wanting
//! null-filled payloads instead of a hard gate use [`crate::ensure_keys`].

use serde_json::Value;
use tracing::warn;

/// Keys every element of a segment list must carry
const SEGMENT_KEYS: &[&str] = &["type", "content"];

/// Keys a script analysis must carry at the top level
const ANALYSIS_KEYS: &[&str] = &["topic", "style", "key_concepts"];

/// Check that `value` is a well-formed segmentation result
///
/// Requires a top-level object with a `segments` array whose every element
/// is an object containing `type` and `content`.
pub fn is_valid_segments(value: &Value) -> bool {
    let map = match value.as_object() {
        Some(map) => map,
        None => return false,
    };

    let segments = match map.get("segments").and_then(Value::as_array) {
        Some(segments) => segments,
        None => {
            warn!("Segmentation result has no 'segments' array");
            return false;
        }
    };

    for (idx, segment) in segments.iter().enumerate() {
        let fields = match segment.as_object() {
            Some(fields) => fields,
            None => {
                warn!("Segment {} is not an object", idx);
                return false;
            }
        };
        for key in SEGMENT_KEYS {
            if !fields.contains_key(*key) {
                warn!("Segment {} missing required key '{}'", idx, key);
                return false;
            }
        }
    }

    true
}

/// Check that `value` is a well-formed script analysis
pub fn is_valid_analysis(value: &Value) -> bool {
    let map = match value.as_object() {
        Some(map) => map,
        None => return false,
    };

    let missing: Vec<&str> = ANALYSIS_KEYS
        .iter()
        .copied()
        .filter(|key| !map.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        warn!("Analysis missing required keys: {:?}", missing);
        return false;
    }

    true
}
