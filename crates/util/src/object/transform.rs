//! Shallow and recursive reshaping of JSON objects.

use serde_json::{Map, Value};

/// Keep only the listed keys, in the order they are listed.
///
/// Non-object input yields an empty object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::object::pick;
///
/// let user = json!({"id": 1, "name": "Ann", "password": "x"});
/// assert_eq!(pick(&user, &["name", "id", "missing"]), json!({"name": "Ann", "id": 1}));
/// ```
pub fn pick(value: &Value, keys: &[&str]) -> Value {
    let mut out = Map::new();
    if let Value::Object(map) = value {
        for key in keys {
            if let Some(val) = map.get(*key) {
                out.insert((*key).to_string(), val.clone());
            }
        }
    }
    Value::Object(out)
}

/// Copy an object without the listed keys.
pub fn omit(value: &Value, keys: &[&str]) -> Value {
    let mut out = Map::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            if !keys.contains(&key.as_str()) {
                out.insert(key.clone(), val.clone());
            }
        }
    }
    Value::Object(out)
}

/// Flatten nested objects into a single level with dotted keys.
///
/// Arrays, scalars and empty objects are leaves.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::object::flatten_object;
///
/// let flat = flatten_object(&json!({"a": {"b": 1, "c": {"d": [2]}}, "e": {}}));
/// assert_eq!(serde_json::Value::Object(flat), json!({"a.b": 1, "a.c.d": [2], "e": {}}));
/// ```
pub fn flatten_object(value: &Value) -> Map<String, Value> {
    let mut out = Map::new();
    if let Value::Object(map) = value {
        flatten_into(map, "", &mut out);
    }
    out
}

fn flatten_into(map: &Map<String, Value>, prefix: &str, out: &mut Map<String, Value>) {
    for (key, val) in map {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) if !inner.is_empty() => flatten_into(inner, &full, out),
            _ => {
                out.insert(full, val.clone());
            }
        }
    }
}

/// Rebuild nested objects from dotted keys. Inverse of [`flatten_object`].
///
/// Every segment creates an object; digit segments are not turned into
/// arrays. A later key overwrites a scalar that sits on its way.
pub fn unflatten_object(flat: &Map<String, Value>) -> Value {
    let mut root = Map::new();
    for (key, val) in flat {
        let segments: Vec<&str> = key.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            continue;
        };
        let mut current = &mut root;
        for segment in parents {
            let entry = current
                .entry((*segment).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            current = match entry {
                Value::Object(inner) => inner,
                _ => unreachable!("object ensured above"),
            };
        }
        current.insert((*last).to_string(), val.clone());
    }
    Value::Object(root)
}

/// Swap keys and values. Non-string values are stringified as JSON.
///
/// When several keys share a value the last one wins.
pub fn invert(value: &Value) -> Value {
    let mut out = Map::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            let new_key = match val {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            out.insert(new_key, Value::String(key.clone()));
        }
    }
    Value::Object(out)
}

/// Transform every value of an object, keeping the keys.
pub fn map_values<F>(value: &Value, mut f: F) -> Value
where
    F: FnMut(&str, &Value) -> Value,
{
    let mut out = Map::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            out.insert(key.clone(), f(key, val));
        }
    }
    Value::Object(out)
}

/// Recursively drop object entries that are `null` or an empty string.
///
/// Array elements are cleaned but never removed.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::object::clean;
///
/// let cleaned = clean(&json!({"a": null, "b": "", "c": {"d": null, "e": 0}, "f": [{"g": null}]}));
/// assert_eq!(cleaned, json!({"c": {"e": 0}, "f": [{}]}));
/// ```
pub fn clean(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, val) in map {
                match val {
                    Value::Null => {}
                    Value::String(s) if s.is_empty() => {}
                    other => {
                        out.insert(key.clone(), clean(other));
                    }
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(clean).collect()),
        other => other.clone(),
    }
}
