//! Dynamic runtime value.
//!
//! [`AnyValue`] models the "any value" inputs accepted by the predicate and
//! cloning helpers: everything JSON can hold plus `undefined`, dates, regular
//! expressions and class instances.

use crate::error::UtilError;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use regex::Regex;
use serde_json::{Map, Number, Value};
use std::fmt;

/// Ordered property bag used by objects and instances.
pub type Fields = IndexMap<String, AnyValue>;

/// Any runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyValue {
    /// `undefined`, the absence of a value.
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<AnyValue>),
    /// A plain object literal.
    Object(Fields),
    Date(DateTime<Utc>),
    RegExp(RegExpValue),
    /// An instance of a named class with its own enumerable fields.
    Instance { class: String, fields: Fields },
}

impl AnyValue {
    /// Build a plain object from key/value pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AnyValue)>,
    {
        AnyValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a class instance from key/value pairs.
    pub fn instance<K, I>(class: impl Into<String>, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AnyValue)>,
    {
        AnyValue::Instance {
            class: class.into(),
            fields: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Convert to JSON.
    ///
    /// `Undefined` and non-finite numbers become `null`, dates become RFC 3339
    /// strings, regular expressions become `/source/flags` and instances lose
    /// their class name.
    pub fn to_json(&self) -> Value {
        match self {
            AnyValue::Undefined | AnyValue::Null => Value::Null,
            AnyValue::Bool(b) => Value::Bool(*b),
            AnyValue::Number(n) => number_to_json(*n),
            AnyValue::String(s) => Value::String(s.clone()),
            AnyValue::Array(items) => Value::Array(items.iter().map(AnyValue::to_json).collect()),
            AnyValue::Object(fields) | AnyValue::Instance { fields, .. } => {
                let mut map = Map::new();
                for (key, val) in fields {
                    map.insert(key.clone(), val.to_json());
                }
                Value::Object(map)
            }
            AnyValue::Date(date) => Value::String(date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            AnyValue::RegExp(re) => Value::String(re.to_string()),
        }
    }

    /// Borrow the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Return the numeric payload, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AnyValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Convert an `f64` into a JSON number, preferring the integer form.
pub(crate) fn number_to_json(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

impl From<Value> for AnyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => AnyValue::Null,
            Value::Bool(b) => AnyValue::Bool(b),
            Value::Number(n) => AnyValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => AnyValue::String(s),
            Value::Array(items) => AnyValue::Array(items.into_iter().map(AnyValue::from).collect()),
            Value::Object(map) => {
                AnyValue::Object(map.into_iter().map(|(k, v)| (k, AnyValue::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for AnyValue {
    fn from(value: &Value) -> Self {
        AnyValue::from(value.clone())
    }
}

impl From<AnyValue> for Value {
    fn from(value: AnyValue) -> Self {
        value.to_json()
    }
}

impl From<bool> for AnyValue {
    fn from(b: bool) -> Self {
        AnyValue::Bool(b)
    }
}

impl From<f64> for AnyValue {
    fn from(n: f64) -> Self {
        AnyValue::Number(n)
    }
}

impl From<i64> for AnyValue {
    fn from(n: i64) -> Self {
        AnyValue::Number(n as f64)
    }
}

impl From<i32> for AnyValue {
    fn from(n: i32) -> Self {
        AnyValue::Number(f64::from(n))
    }
}

impl From<String> for AnyValue {
    fn from(s: String) -> Self {
        AnyValue::String(s)
    }
}

impl From<&str> for AnyValue {
    fn from(s: &str) -> Self {
        AnyValue::String(s.to_string())
    }
}

impl From<DateTime<Utc>> for AnyValue {
    fn from(date: DateTime<Utc>) -> Self {
        AnyValue::Date(date)
    }
}

impl From<RegExpValue> for AnyValue {
    fn from(re: RegExpValue) -> Self {
        AnyValue::RegExp(re)
    }
}

impl<T: Into<AnyValue>> From<Vec<T>> for AnyValue {
    fn from(items: Vec<T>) -> Self {
        AnyValue::Array(items.into_iter().map(Into::into).collect())
    }
}

/// A compiled regular expression that remembers its source and flags.
///
/// Supported flags: `i`, `m`, `s`. The `g`, `u` and `y` flags are recorded
/// but have no effect on matching.
#[derive(Debug, Clone)]
pub struct RegExpValue {
    source: String,
    flags: String,
    regex: Regex,
}

impl RegExpValue {
    pub fn new(source: &str, flags: &str) -> Result<Self, UtilError> {
        let mut inline = String::new();
        for flag in flags.chars() {
            match flag {
                'i' | 'm' | 's' => inline.push(flag),
                'g' | 'u' | 'y' => {}
                other => return Err(UtilError::InvalidPattern(format!("unknown flag '{other}'"))),
            }
        }
        let pattern = if inline.is_empty() {
            source.to_string()
        } else {
            format!("(?{inline}){source}")
        };
        let regex = Regex::new(&pattern).map_err(|e| UtilError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            source: source.to_string(),
            flags: flags.to_string(),
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for RegExpValue {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for RegExpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_from_json_round_trip() {
        let original = json!({"a": [1, 2.5, "x", null, true], "b": {"c": {}}});
        let any = AnyValue::from(original.clone());
        assert_eq!(any.to_json(), original);
    }

    #[test]
    fn test_object_keeps_insertion_order() {
        let obj = AnyValue::object([("z", AnyValue::from(1)), ("a", AnyValue::from(2))]);
        let keys: Vec<String> = match &obj {
            AnyValue::Object(fields) => fields.keys().cloned().collect(),
            _ => unreachable!(),
        };
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_undefined_and_nan_serialize_as_null() {
        assert_eq!(AnyValue::Undefined.to_json(), Value::Null);
        assert_eq!(AnyValue::Number(f64::NAN).to_json(), Value::Null);
    }

    #[test]
    fn test_date_serializes_as_rfc3339() {
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(AnyValue::Date(date).to_json(), json!("2024-01-02T03:04:05.000Z"));
    }

    #[test]
    fn test_instance_drops_class_in_json() {
        let inst = AnyValue::instance("Point", [("x", AnyValue::from(1))]);
        assert_eq!(inst.to_json(), json!({"x": 1}));
    }

    #[test]
    fn test_regexp_flags() {
        let re = RegExpValue::new("^abc$", "gi").unwrap();
        assert!(re.is_match("ABC"));
        assert_eq!(re.to_string(), "/^abc$/gi");
        assert!(RegExpValue::new("a", "q").is_err());
        assert!(RegExpValue::new("(", "").is_err());
    }

    #[test]
    fn test_regexp_equality_uses_source_and_flags() {
        let a = RegExpValue::new("a+", "i").unwrap();
        let b = RegExpValue::new("a+", "i").unwrap();
        let c = RegExpValue::new("a+", "").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
