use crate::value::AnyValue;

/// Check whether a value is "empty".
///
/// Empty means `null`/`undefined`, a whitespace-only string, a zero-length
/// array, or an object or instance with no own properties. Numbers, booleans,
/// dates and regexps are never empty.
///
/// # Examples
///
/// ```
/// use utilkit::types::is_empty;
/// use utilkit::AnyValue;
///
/// assert!(is_empty(&AnyValue::from("   ")));
/// assert!(!is_empty(&AnyValue::from(0)));
/// ```
pub fn is_empty(value: &AnyValue) -> bool {
    match value {
        AnyValue::Undefined | AnyValue::Null => true,
        AnyValue::String(s) => s.trim().is_empty(),
        AnyValue::Array(items) => items.is_empty(),
        AnyValue::Object(fields) | AnyValue::Instance { fields, .. } => fields.is_empty(),
        AnyValue::Bool(_) | AnyValue::Number(_) | AnyValue::Date(_) | AnyValue::RegExp(_) => false,
    }
}
