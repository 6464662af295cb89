use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d+(\.\d+)?([eE][+-]?\d+)?|true|false|null)$").expect("valid regex")
});

fn looks_like_json(trimmed: &str) -> bool {
    let wrapped = |open: char, close: char| trimmed.starts_with(open) && trimmed.ends_with(close);
    wrapped('{', '}') || wrapped('[', ']') || wrapped('"', '"') || LITERAL_RE.is_match(trimmed)
}

/// Leniently parse a string that may or may not hold JSON.
///
/// - `None` or `""` gives `default`, or `{}` when no default is given.
/// - Text that does not look like JSON (an object, array, quoted string or a
///   number/boolean/null literal) gives `default`, or the original string.
/// - Malformed JSON is logged at debug level and treated the same way.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::types::parse_json_str;
///
/// assert_eq!(parse_json_str(Some(r#"{"a": [1]}"#), None), json!({"a": [1]}));
/// assert_eq!(parse_json_str(Some("{invalid json}"), None), json!("{invalid json}"));
/// assert_eq!(parse_json_str(None, Some(json!([]))), json!([]));
/// ```
pub fn parse_json_str(input: Option<&str>, default: Option<Value>) -> Value {
    let text = match input {
        Some(text) if !text.is_empty() => text,
        _ => return default.unwrap_or_else(|| Value::Object(Map::new())),
    };
    let fallback = || Value::String(text.to_string());

    let trimmed = text.trim();
    if !looks_like_json(trimmed) {
        return default.unwrap_or_else(fallback);
    }
    match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, input = trimmed, "json-looking text failed to parse");
            default.unwrap_or_else(fallback)
        }
    }
}
