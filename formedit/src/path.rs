//! Dotted-path addressing over `serde_json::Value`.
//!
//! Editor fields reference the property they edit by a dot-separated path
//! (e.g. `background.overlay.opacity`), which lets one generic get/set
//! implementation serve every field instead of per-field code. Numeric
//! segments index into arrays on read; on write, intermediate objects are
//! created as needed.

use serde_json::{Map, Value};

/// Reads the value at a dotted path, if present.
///
/// Numeric segments index into arrays, everything else keys into objects.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Writes `new` at a dotted path, creating intermediate objects as needed.
///
/// Existing non-object intermediates are replaced by objects, matching the
/// generic path-creation behavior the migration mapper relies on:
/// `set_path({}, "a.b.c", 5)` produces `{"a":{"b":{"c":5}}}`.
pub fn set_path(value: &mut Value, path: &str, new: Value) {
    let segments: Vec<&str> = path.split('.').collect();
    let mut current = value;
    for (i, segment) in segments.iter().enumerate() {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let map = current.as_object_mut().expect("coerced to object above");
        if i == segments.len() - 1 {
            map.insert((*segment).to_string(), new);
            return;
        }
        current = map
            .entry((*segment).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

/// Returns a new property object with `new` written at the dotted path.
///
/// The input is never mutated; edits always produce a fresh object so
/// callers can treat properties as immutable between renders.
pub fn with_path(value: &Value, path: &str, new: Value) -> Value {
    let mut out = value.clone();
    set_path(&mut out, path, new);
    out
}

/// Deep-merges `overlay` onto `base` and returns the result.
///
/// Objects merge key-by-key; every other type (including arrays) is
/// replaced wholesale by the overlay. Used to resolve registry defaults
/// against persisted or edited section data.
pub fn merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(b), Value::Object(o)) => {
            let mut out = b.clone();
            for (key, value) in o {
                match out.get(key) {
                    Some(existing) => {
                        let merged = merge(existing, value);
                        out.insert(key.clone(), merged);
                    }
                    None => {
                        out.insert(key.clone(), value.clone());
                    }
                }
            }
            Value::Object(out)
        }
        _ => overlay.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_path_creates_intermediates() {
        let mut value = json!({});
        set_path(&mut value, "a.b.c", json!(5));
        assert_eq!(value, json!({"a": {"b": {"c": 5}}}));
    }

    #[test]
    fn test_set_path_replaces_scalar_intermediate() {
        let mut value = json!({"a": 1});
        set_path(&mut value, "a.b", json!("x"));
        assert_eq!(value, json!({"a": {"b": "x"}}));
    }

    #[test]
    fn test_get_path() {
        let value = json!({"background": {"overlay": {"opacity": 0.4}}});
        assert_eq!(
            get_path(&value, "background.overlay.opacity"),
            Some(&json!(0.4))
        );
        assert_eq!(get_path(&value, "background.missing"), None);
    }

    #[test]
    fn test_get_path_array_index() {
        let value = json!({"items": [{"title": "first"}]});
        assert_eq!(get_path(&value, "items.0.title"), Some(&json!("first")));
        assert_eq!(get_path(&value, "items.1.title"), None);
    }

    #[test]
    fn test_with_path_leaves_input_untouched() {
        let original = json!({"title": {"text": "T"}});
        let updated = with_path(&original, "title.text", json!("U"));
        assert_eq!(original, json!({"title": {"text": "T"}}));
        assert_eq!(updated, json!({"title": {"text": "U"}}));
    }

    #[test]
    fn test_merge_overlay_wins_per_leaf() {
        let base = json!({"title": {"text": "T", "tag": "h1"}, "textAlign": "center"});
        let overlay = json!({"title": {"text": "U"}});
        let merged = merge(&base, &overlay);
        assert_eq!(
            merged,
            json!({"title": {"text": "U", "tag": "h1"}, "textAlign": "center"})
        );
    }

    #[test]
    fn test_merge_replaces_arrays() {
        let base = json!({"items": [1, 2, 3]});
        let overlay = json!({"items": [4]});
        assert_eq!(merge(&base, &overlay), json!({"items": [4]}));
    }
}
