use serde_json::Value;

/// Recursively merge `source` into a copy of `target`.
///
/// When both sides hold an object under the same key the two are merged,
/// otherwise the source value wins. Arrays are replaced, not concatenated.
/// If either argument is not an object the result is a copy of `source`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::object::deep_merge;
///
/// let merged = deep_merge(
///     &json!({"db": {"host": "localhost", "port": 5432}, "debug": false}),
///     &json!({"db": {"port": 6543}, "debug": true}),
/// );
/// assert_eq!(merged, json!({"db": {"host": "localhost", "port": 6543}, "debug": true}));
/// ```
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            let mut merged = target_map.clone();
            for (key, src_val) in source_map {
                let next = match merged.get(key) {
                    Some(existing) if existing.is_object() && src_val.is_object() => deep_merge(existing, src_val),
                    _ => src_val.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        _ => source.clone(),
    }
}

/// Merge several values left to right with [`deep_merge`].
pub fn deep_merge_all<'a, I>(values: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    values
        .into_iter()
        .fold(Value::Object(Default::default()), |acc, next| deep_merge(&acc, next))
}
