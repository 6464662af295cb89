use serde_json::{Map, Value};

/// Check if an object has an own property with the given key.
///
/// This is the Rust equivalent of `Object.prototype.hasOwnProperty.call(obj, key)`.
/// Returns false if the value is not an object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::object::has_own_property;
///
/// let obj = json!({"foo": null});
/// assert!(has_own_property(&obj, "foo"));
/// assert!(!has_own_property(&obj, "bar"));
/// ```
pub fn has_own_property(obj: &Value, key: &str) -> bool {
    match obj {
        Value::Object(map) => has_own_property_map(map, key),
        _ => false,
    }
}

/// Check if a serde_json::Map has an own property with the given key.
pub fn has_own_property_map(obj: &Map<String, Value>, key: &str) -> bool {
    obj.contains_key(key)
}
