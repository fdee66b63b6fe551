//! Required-key repair for salvaged values

use serde_json::{Map, Value};
use tracing::warn;

/// Return an object guaranteed to contain every key in `required_keys`
///
/// Missing keys are filled with null and logged; keys already present,
/// including explicit nulls, are never touched, and extra keys pass through
/// unchanged. Always returns a new owned map rather than mutating a shared
/// value.
///
/// Degenerate inputs collapse to an empty map so callers get one shape to
/// handle:
/// - `None` (extraction failed) → empty map, no keys filled
/// - empty array → empty map
/// - array whose head is an object → that object, repaired
/// - array whose head is anything else → empty map
/// - non-object scalar → empty map
pub fn ensure_keys(value: Option<Value>, required_keys: &[&str]) -> Map<String, Value> {
    match value {
        None => {
            warn!("No value to repair, returning empty object");
            Map::new()
        }
        Some(Value::Object(mut map)) => {
            let missing: Vec<&str> = required_keys
                .iter()
                .copied()
                .filter(|key| !map.contains_key(*key))
                .collect();
            if !missing.is_empty() {
                warn!("Response missing required keys, filled with null: {:?}", missing);
                for key in missing {
                    map.insert(key.to_string(), Value::Null);
                }
            }
            map
        }
        Some(Value::Array(mut items)) => {
            if items.is_empty() {
                warn!("Response is an empty array, returning empty object");
                return Map::new();
            }
            let head = items.swap_remove(0);
            if head.is_object() {
                // Some prompts yield a single-element list around the
                // expected object; unwrap and repair the head.
                ensure_keys(Some(head), required_keys)
            } else {
                warn!("Array head is not an object, returning empty object");
                Map::new()
            }
        }
        Some(other) => {
            warn!("Expected object, got {}, returning empty object", kind_of(&other));
            Map::new()
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_value(map: Map<String, Value>) -> Value {
        Value::Object(map)
    }

    #[test]
    fn test_fills_missing_keys_with_null() {
        let repaired = ensure_keys(Some(json!({"x": 1})), &["x", "y"]);
        assert_eq!(repaired["x"], 1);
        assert!(repaired["y"].is_null());
    }

    #[test]
    fn test_repair_is_idempotent() {
        let once = ensure_keys(Some(json!({"x": 1})), &["x", "y"]);
        let twice = ensure_keys(Some(as_value(once.clone())), &["x", "y"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_present_null_is_not_overwritten() {
        let repaired = ensure_keys(Some(json!({"x": null})), &["x"]);
        assert!(repaired["x"].is_null());
        assert_eq!(repaired.len(), 1);
    }

    #[test]
    fn test_extra_keys_pass_through() {
        let repaired = ensure_keys(Some(json!({"x": 1, "bonus": "kept"})), &["x"]);
        assert_eq!(repaired["bonus"], "kept");
    }

    #[test]
    fn test_none_returns_empty_map() {
        // Absence yields an EMPTY map - required keys are not filled in.
        // Callers decide whether an empty map is itself a failure.
        let repaired = ensure_keys(None, &["a", "b"]);
        assert!(repaired.is_empty());
    }

    #[test]
    fn test_single_element_list_unwrap() {
        let repaired = ensure_keys(Some(json!([{"a": 1}])), &["a", "b"]);
        assert_eq!(repaired["a"], 1);
        assert!(repaired["b"].is_null());
    }

    #[test]
    fn test_multi_element_list_uses_head_only() {
        let repaired = ensure_keys(Some(json!([{"a": 1}, {"a": 2}])), &["a"]);
        assert_eq!(repaired["a"], 1);
    }

    #[test]
    fn test_empty_array_returns_empty_map() {
        assert!(ensure_keys(Some(json!([])), &["a"]).is_empty());
    }

    #[test]
    fn test_nested_array_head_is_schema_violation() {
        // A list-of-lists head is not unwrapped recursively.
        assert!(ensure_keys(Some(json!([[1, 2]])), &["a"]).is_empty());
    }

    #[test]
    fn test_scalar_returns_empty_map() {
        assert!(ensure_keys(Some(json!(42)), &["a"]).is_empty());
        assert!(ensure_keys(Some(json!("text")), &["a"]).is_empty());
    }

    #[test]
    fn test_no_required_keys() {
        let repaired = ensure_keys(Some(json!({"x": 1})), &[]);
        assert_eq!(repaired.len(), 1);
    }
}
