use crate::object::get;
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([\w$.\[\]-]+)\s*\}\}|\$\{\s*([\w$.\[\]-]+)\s*\}").expect("valid regex")
});

/// Fill `{{ path }}` and `${path}` placeholders from `data`.
///
/// Paths use the same syntax as [`crate::object::get`]. Missing or `null`
/// values render as an empty string, strings render without quotes and any
/// other value renders as compact JSON.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::strings::template;
///
/// let data = json!({"user": {"name": "Ada", "tags": ["a", "b"]}});
/// assert_eq!(template("Hi {{ user.name }}!", &data), "Hi Ada!");
/// assert_eq!(template("${user.tags[1]}/${missing}", &data), "b/");
/// ```
pub fn template(tpl: &str, data: &Value) -> String {
    PLACEHOLDER_RE
        .replace_all(tpl, |caps: &Captures| {
            let path = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            match get(data, path) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            }
        })
        .into_owned()
}
