use crate::value::{AnyValue, Fields};

/// Creates a deep clone of any runtime value.
///
/// Arrays, objects, dates and regular expressions are cloned recursively.
/// A class instance is cloned as a plain object holding its own fields; the
/// class itself is not carried over.
///
/// # Examples
///
/// ```
/// use utilkit::object::deep_clone;
/// use utilkit::AnyValue;
///
/// let point = AnyValue::instance("Point", [("x", AnyValue::from(1))]);
/// assert_eq!(deep_clone(&point), AnyValue::object([("x", AnyValue::from(1))]));
/// ```
pub fn deep_clone(value: &AnyValue) -> AnyValue {
    match value {
        AnyValue::Undefined => AnyValue::Undefined,
        AnyValue::Null => AnyValue::Null,
        AnyValue::Bool(b) => AnyValue::Bool(*b),
        AnyValue::Number(n) => AnyValue::Number(*n),
        AnyValue::String(s) => AnyValue::String(s.clone()),
        AnyValue::Array(items) => AnyValue::Array(items.iter().map(deep_clone).collect()),
        AnyValue::Date(date) => AnyValue::Date(*date),
        AnyValue::RegExp(re) => AnyValue::RegExp(re.clone()),
        AnyValue::Object(fields) | AnyValue::Instance { fields, .. } => AnyValue::Object(clone_fields(fields)),
    }
}

fn clone_fields(fields: &Fields) -> Fields {
    let mut new_fields = Fields::with_capacity(fields.len());
    for (key, val) in fields {
        new_fields.insert(key.clone(), deep_clone(val));
    }
    new_fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::RegExpValue;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_clone_primitives() {
        for value in [
            AnyValue::Undefined,
            AnyValue::Null,
            AnyValue::Bool(true),
            AnyValue::Number(1.5),
            AnyValue::from("hi"),
        ] {
            assert_eq!(deep_clone(&value), value);
        }
    }

    #[test]
    fn test_clone_nested_json() {
        let value = AnyValue::from(json!({"a": [1, {"b": [2, 3]}], "c": null}));
        let cloned = deep_clone(&value);
        assert_eq!(cloned, value);
    }

    #[test]
    fn test_clone_is_a_separate_allocation() {
        let value = AnyValue::from(json!([[1, 2], [3]]));
        let cloned = deep_clone(&value);
        match (&value, &cloned) {
            (AnyValue::Array(a), AnyValue::Array(b)) => {
                assert_ne!(a.as_ptr(), b.as_ptr());
            }
            _ => panic!("expected arrays"),
        }
    }

    #[test]
    fn test_clone_date_and_regexp() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let re = RegExpValue::new("^a", "i").unwrap();
        let value = AnyValue::object([("when", AnyValue::Date(date)), ("re", AnyValue::RegExp(re))]);
        let cloned = deep_clone(&value);
        assert_eq!(cloned, value);
        if let AnyValue::Object(fields) = &cloned {
            assert!(matches!(fields["re"], AnyValue::RegExp(ref r) if r.is_match("ABC")));
        }
    }

    #[test]
    fn test_clone_instance_loses_class() {
        let inner = AnyValue::instance("Inner", [("v", AnyValue::from(2))]);
        let outer = AnyValue::instance("Outer", [("inner", inner)]);
        let cloned = deep_clone(&outer);
        let expected = AnyValue::object([("inner", AnyValue::object([("v", AnyValue::from(2))]))]);
        assert_eq!(cloned, expected);
    }
}
