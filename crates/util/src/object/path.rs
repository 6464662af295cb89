//! Dotted/bracketed property paths such as `a.b[0].c` or `a["x.y"]`.

use crate::error::UtilError;
use serde_json::{Map, Value};

/// A single step of a property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKey {
    Key(String),
    Index(usize),
}

impl PathKey {
    fn from_segment(segment: &str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = segment.parse() {
                return PathKey::Index(index);
            }
        }
        PathKey::Key(segment.to_string())
    }

    fn as_key(&self) -> String {
        match self {
            PathKey::Key(key) => key.clone(),
            PathKey::Index(index) => index.to_string(),
        }
    }
}

/// Split a path into keys.
///
/// Digit-only segments become [`PathKey::Index`], quoted bracket segments are
/// always keys. An empty path addresses the root.
///
/// # Examples
///
/// ```
/// use utilkit::object::{parse_path, PathKey};
///
/// assert_eq!(
///     parse_path("a[0].b").unwrap(),
///     vec![PathKey::Key("a".into()), PathKey::Index(0), PathKey::Key("b".into())]
/// );
/// assert!(parse_path("a[0").is_err());
/// ```
pub fn parse_path(path: &str) -> Result<Vec<PathKey>, UtilError> {
    let mut keys = Vec::new();
    let mut buffer = String::new();
    let mut chars = path.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if !buffer.is_empty() {
                    keys.push(PathKey::from_segment(&buffer));
                    buffer.clear();
                }
            }
            '[' => {
                if !buffer.is_empty() {
                    keys.push(PathKey::from_segment(&buffer));
                    buffer.clear();
                }
                let quote = match chars.peek() {
                    Some(&q @ ('"' | '\'')) => {
                        chars.next();
                        Some(q)
                    }
                    _ => None,
                };
                let mut inner = String::new();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match quote {
                        Some(q) if c == q => {
                            if chars.next() != Some(']') {
                                return Err(UtilError::InvalidPath(path.to_string()));
                            }
                            closed = true;
                            break;
                        }
                        None if c == ']' => {
                            closed = true;
                            break;
                        }
                        _ => inner.push(c),
                    }
                }
                if !closed {
                    return Err(UtilError::InvalidPath(path.to_string()));
                }
                keys.push(match quote {
                    Some(_) => PathKey::Key(inner),
                    None => PathKey::from_segment(inner.trim()),
                });
            }
            ']' => return Err(UtilError::InvalidPath(path.to_string())),
            _ => buffer.push(ch),
        }
    }
    if !buffer.is_empty() {
        keys.push(PathKey::from_segment(&buffer));
    }
    Ok(keys)
}

fn step<'a>(value: &'a Value, key: &PathKey) -> Option<&'a Value> {
    match (value, key) {
        (Value::Object(map), key) => map.get(&key.as_key()),
        (Value::Array(items), PathKey::Index(index)) => items.get(*index),
        _ => None,
    }
}

/// Read the value at `path`. Invalid paths and missing keys yield `None`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::object::get;
///
/// let doc = json!({"a": {"b": [10, {"c": 3}]}});
/// assert_eq!(get(&doc, "a.b[1].c"), Some(&json!(3)));
/// assert_eq!(get(&doc, "a.x"), None);
/// ```
pub fn get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let keys = parse_path(path).ok()?;
    keys.iter().try_fold(value, |current, key| step(current, key))
}

/// Read the value at `path`, falling back to `default` when it is missing.
pub fn get_or(value: &Value, path: &str, default: Value) -> Value {
    get(value, path).cloned().unwrap_or(default)
}

/// Check whether `path` resolves to a value (including `null`).
pub fn has_path(value: &Value, path: &str) -> bool {
    get(value, path).is_some()
}

fn empty_container(next: &PathKey) -> Value {
    match next {
        PathKey::Index(_) => Value::Array(Vec::new()),
        PathKey::Key(_) => Value::Object(Map::new()),
    }
}

/// Largest number of `null` slots `set` will pad an array with.
const MAX_INDEX_GAP: usize = 1 << 16;

fn slot<'a>(value: &'a mut Value, key: &PathKey, path: &str) -> Result<&'a mut Value, UtilError> {
    if value.is_array() && matches!(key, PathKey::Key(_)) {
        *value = Value::Object(Map::new());
    }
    if !value.is_array() && !value.is_object() {
        *value = empty_container(key);
    }
    match (value, key) {
        (Value::Array(items), PathKey::Index(index)) => {
            if index.saturating_sub(items.len()) > MAX_INDEX_GAP {
                return Err(UtilError::InvalidPath(path.to_string()));
            }
            if items.len() <= *index {
                items.resize(*index + 1, Value::Null);
            }
            Ok(&mut items[*index])
        }
        (value, key) => {
            if !value.is_object() {
                *value = Value::Object(Map::new());
            }
            match value {
                Value::Object(map) => Ok(map.entry(key.as_key()).or_insert(Value::Null)),
                _ => unreachable!("object ensured above"),
            }
        }
    }
}

/// Write `new_value` at `path`, creating intermediate containers.
///
/// A missing intermediate becomes an array when the following key is an
/// index and an object otherwise. Scalars on the way are replaced. Arrays
/// grow with `null` padding. An empty path replaces the root. An index more
/// than 65536 past the end of its array is rejected as `InvalidPath`;
/// containers created before that step are kept.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::object::set;
///
/// let mut doc = json!({});
/// set(&mut doc, "a.b[1]", json!("x")).unwrap();
/// assert_eq!(doc, json!({"a": {"b": [null, "x"]}}));
/// ```
pub fn set(value: &mut Value, path: &str, new_value: Value) -> Result<(), UtilError> {
    let keys = parse_path(path)?;
    let mut current = value;
    for key in &keys {
        current = slot(current, key, path)?;
    }
    *current = new_value;
    Ok(())
}

/// Remove the value at `path`.
///
/// Object keys are deleted. Array elements are replaced by `null` so the
/// remaining indices stay stable. Returns whether anything was removed.
pub fn unset(value: &mut Value, path: &str) -> bool {
    let Ok(keys) = parse_path(path) else {
        return false;
    };
    let Some((last, parents)) = keys.split_last() else {
        return false;
    };
    let mut current = value;
    for key in parents {
        let next = match (current, key) {
            (Value::Object(map), key) => map.get_mut(&key.as_key()),
            (Value::Array(items), PathKey::Index(index)) => items.get_mut(*index),
            _ => None,
        };
        match next {
            Some(next) => current = next,
            None => return false,
        }
    }
    match (current, last) {
        (Value::Object(map), key) => map.shift_remove(&key.as_key()).is_some(),
        (Value::Array(items), PathKey::Index(index)) => match items.get_mut(*index) {
            Some(item) => {
                *item = Value::Null;
                true
            }
            None => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_path() {
        assert!(parse_path("").unwrap().is_empty());
        assert_eq!(
            parse_path("a.b.c").unwrap(),
            vec![PathKey::Key("a".into()), PathKey::Key("b".into()), PathKey::Key("c".into())]
        );
        assert_eq!(
            parse_path("list.0").unwrap(),
            vec![PathKey::Key("list".into()), PathKey::Index(0)]
        );
        assert_eq!(
            parse_path("a[\"x.y\"]['0']").unwrap(),
            vec![PathKey::Key("a".into()), PathKey::Key("x.y".into()), PathKey::Key("0".into())]
        );
        assert!(parse_path("a]").is_err());
        assert!(parse_path("a['x]").is_err());
    }

    #[test]
    fn test_get() {
        let doc = json!({"a": {"b": [1, 2, {"c": null}]}, "0": "zero"});
        assert_eq!(get(&doc, ""), Some(&doc));
        assert_eq!(get(&doc, "a.b[1]"), Some(&json!(2)));
        assert_eq!(get(&doc, "a.b.2.c"), Some(&Value::Null));
        assert_eq!(get(&doc, "0"), Some(&json!("zero")));
        assert_eq!(get(&doc, "a.b[9]"), None);
        assert_eq!(get(&doc, "a.b.x"), None);
        assert_eq!(get(&doc, "a[0"), None);
    }

    #[test]
    fn test_get_or_and_has_path() {
        let doc = json!({"a": {"b": null}});
        assert_eq!(get_or(&doc, "a.c", json!(5)), json!(5));
        assert_eq!(get_or(&doc, "a.b", json!(5)), Value::Null);
        assert!(has_path(&doc, "a.b"));
        assert!(!has_path(&doc, "a.b.c"));
    }

    #[test]
    fn test_set_creates_containers() {
        let mut doc = Value::Null;
        set(&mut doc, "user.tags[0]", json!("admin")).unwrap();
        set(&mut doc, "user.name", json!("Ann")).unwrap();
        assert_eq!(doc, json!({"user": {"tags": ["admin"], "name": "Ann"}}));
    }

    #[test]
    fn test_set_overwrites_scalars_on_the_way() {
        let mut doc = json!({"a": 1});
        set(&mut doc, "a.b", json!(true)).unwrap();
        assert_eq!(doc, json!({"a": {"b": true}}));
    }

    #[test]
    fn test_set_root_and_invalid() {
        let mut doc = json!({"a": 1});
        set(&mut doc, "", json!([1])).unwrap();
        assert_eq!(doc, json!([1]));
        assert_eq!(
            set(&mut doc, "a[", json!(1)),
            Err(UtilError::InvalidPath("a[".to_string()))
        );
    }

    #[test]
    fn test_set_huge_index_is_rejected() {
        let mut doc = json!({"a": [1]});
        for path in ["a[18446744073709551615]", "a[4000000000]", "b.c[65538]"] {
            assert_eq!(
                set(&mut doc, path, json!(1)),
                Err(UtilError::InvalidPath(path.to_string()))
            );
        }
        assert_eq!(doc["a"], json!([1]));

        set(&mut doc, "a[65537]", json!("last")).unwrap();
        let items = doc["a"].as_array().unwrap();
        assert_eq!(items.len(), 65538);
        assert_eq!(items[65537], json!("last"));
        assert_eq!(items[1], Value::Null);
    }

    #[test]
    fn test_unset() {
        let mut doc = json!({"a": {"b": 1, "c": [1, 2]}});
        assert!(unset(&mut doc, "a.b"));
        assert!(unset(&mut doc, "a.c[0]"));
        assert!(!unset(&mut doc, "a.missing"));
        assert!(!unset(&mut doc, ""));
        assert_eq!(doc, json!({"a": {"c": [null, 2]}}));
    }
}
