use serde_json::Value;

/// Flatten one level of nested arrays.
///
/// ```
/// use serde_json::json;
/// use utilkit::array::flatten;
///
/// assert_eq!(flatten(&[json!(1), json!([2, [3]])]), vec![json!(1), json!(2), json!([3])]);
/// ```
pub fn flatten(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Array(inner) => out.extend(inner.iter().cloned()),
            other => out.push(other.clone()),
        }
    }
    out
}

/// Flatten nested arrays recursively.
pub fn flatten_deep(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    flatten_into(items, &mut out);
    out
}

fn flatten_into(items: &[Value], out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(inner) => flatten_into(inner, out),
            other => out.push(other.clone()),
        }
    }
}

/// Drop falsy values: `null`, `false`, `0` and `""`.
pub fn compact(items: &[Value]) -> Vec<Value> {
    items.iter().filter(|item| !is_falsy(item)).cloned().collect()
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Remove duplicate JSON values by deep equality, keeping first occurrences.
pub fn unique_values(items: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_deep() {
        let items = [json!(1), json!([2, [3, [4, []]]]), json!("x")];
        assert_eq!(flatten_deep(&items), vec![json!(1), json!(2), json!(3), json!(4), json!("x")]);
    }

    #[test]
    fn test_flatten_keeps_objects() {
        assert_eq!(flatten(&[json!({"a": [1]})]), vec![json!({"a": [1]})]);
    }

    #[test]
    fn test_compact() {
        let items = [json!(0), json!(1), json!(false), json!(""), json!(null), json!("a"), json!([]), json!({})];
        assert_eq!(compact(&items), vec![json!(1), json!("a"), json!([]), json!({})]);
    }

    #[test]
    fn test_unique_values() {
        let items = [json!(1), json!("1"), json!(1), json!({"a": 1}), json!({"a": 1})];
        assert_eq!(unique_values(&items), vec![json!(1), json!("1"), json!({"a": 1})]);
    }
}
