//! URL query strings to and from JSON objects.

use serde_json::{Map, Value};
use url::form_urlencoded;

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Serialize an object into a `key=value&...` query string.
///
/// `null` entries are skipped, arrays repeat the key, nested objects are
/// encoded as JSON text. Non-object input gives an empty string.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::object::to_query_string;
///
/// let qs = to_query_string(&json!({"q": "rust lang", "page": 2, "tag": ["a", "b"], "skip": null}));
/// assert_eq!(qs, "q=rust+lang&page=2&tag=a&tag=b");
/// ```
pub fn to_query_string(value: &Value) -> String {
    let Value::Object(map) = value else {
        return String::new();
    };
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, val) in map {
        match val {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(item) {
                        serializer.append_pair(key, &text);
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    serializer.append_pair(key, &text);
                }
            }
        }
    }
    serializer.finish()
}

/// Parse a query string into an object of strings.
///
/// Anything up to and including `?` and anything after `#` is ignored.
/// A key seen more than once collects its values into an array.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::object::parse_query_string;
///
/// let parsed = parse_query_string("https://x.io/s?q=rust+lang&tag=a&tag=b#top");
/// assert_eq!(serde_json::Value::Object(parsed), json!({"q": "rust lang", "tag": ["a", "b"]}));
/// ```
pub fn parse_query_string(input: &str) -> Map<String, Value> {
    let query = match input.split_once('?') {
        Some((_, rest)) => rest,
        None => input,
    };
    let query = query.split('#').next().unwrap_or_default();

    let mut out = Map::new();
    for (key, val) in form_urlencoded::parse(query.as_bytes()) {
        let val = Value::String(val.into_owned());
        match out.get_mut(&*key) {
            Some(Value::Array(existing)) => existing.push(val),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, val]);
            }
            None => {
                out.insert(key.into_owned(), val);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encoding() {
        let qs = to_query_string(&json!({"a&b": "x=y", "emoji": "é"}));
        assert_eq!(qs, "a%26b=x%3Dy&emoji=%C3%A9");
        assert_eq!(to_query_string(&json!([1, 2])), "");
        assert_eq!(to_query_string(&json!({})), "");
    }

    #[test]
    fn test_nested_and_bool() {
        let qs = to_query_string(&json!({"flag": true, "f": {"x": 1}}));
        assert_eq!(qs, "flag=true&f=%7B%22x%22%3A1%7D");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Value::Object(parse_query_string("")), json!({}));
        assert_eq!(Value::Object(parse_query_string("?a=1&b")), json!({"a": "1", "b": ""}));
        assert_eq!(
            Value::Object(parse_query_string("x=1&x=2&x=3")),
            json!({"x": ["1", "2", "3"]})
        );
    }

    #[test]
    fn test_round_trip() {
        let original = json!({"name": "Ann Lee", "tags": ["a b", "c"]});
        let parsed = parse_query_string(&to_query_string(&original));
        assert_eq!(Value::Object(parsed), original);
    }
}
