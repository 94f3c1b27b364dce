//! Small serde_json extraction helpers used by the fetch path.

use serde_json::Value;

/// What: Extract a string value from a JSON object by key, defaulting to
/// empty string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - The string value if found, or `""` when the key is missing or the value
///   is not a string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// What: Join a JSON string array under `key` with `sep`.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key whose value should be an array of strings.
/// - `sep`: Separator placed between elements.
///
/// Output:
/// - `Some(joined)` when the key maps to an array (non-string elements are
///   skipped); `None` when the key is missing or not an array.
#[must_use]
pub fn join_arr(v: &Value, key: &str, sep: &str) -> Option<String> {
    let arr = v.get(key)?.as_array()?;
    let parts: Vec<&str> = arr.iter().filter_map(Value::as_str).collect();
    Some(parts.join(sep))
}

#[cfg(test)]
mod tests {
    use super::{join_arr, s};

    #[test]
    fn string_extraction_defaults_to_empty() {
        let v = serde_json::json!({"a": "str", "b": 3});
        assert_eq!(s(&v, "a"), "str");
        assert_eq!(s(&v, "b"), "");
        assert_eq!(s(&v, "missing"), "");
    }

    #[test]
    fn array_join_handles_mixed_and_missing() {
        let v = serde_json::json!({"xs": ["a", 1, "b"], "n": 5, "empty": []});
        assert_eq!(join_arr(&v, "xs", ", ").as_deref(), Some("a, b"));
        assert_eq!(join_arr(&v, "empty", ", ").as_deref(), Some(""));
        assert_eq!(join_arr(&v, "n", ", "), None);
        assert_eq!(join_arr(&v, "missing", ", "), None);
    }
}
