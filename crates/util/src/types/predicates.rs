//! Runtime type predicates over [`AnyValue`].

use crate::value::AnyValue;

/// Lower-case type tag: `undefined`, `null`, `boolean`, `number`, `string`,
/// `array`, `object`, `date` or `regexp`. Class instances report `object`.
pub fn type_of(value: &AnyValue) -> &'static str {
    match value {
        AnyValue::Undefined => "undefined",
        AnyValue::Null => "null",
        AnyValue::Bool(_) => "boolean",
        AnyValue::Number(_) => "number",
        AnyValue::String(_) => "string",
        AnyValue::Array(_) => "array",
        AnyValue::Object(_) | AnyValue::Instance { .. } => "object",
        AnyValue::Date(_) => "date",
        AnyValue::RegExp(_) => "regexp",
    }
}

pub fn is_string(value: &AnyValue) -> bool {
    matches!(value, AnyValue::String(_))
}

/// True for any number except `NaN`.
pub fn is_number(value: &AnyValue) -> bool {
    matches!(value, AnyValue::Number(n) if !n.is_nan())
}

/// True for finite numbers without a fractional part.
pub fn is_integer(value: &AnyValue) -> bool {
    matches!(value, AnyValue::Number(n) if n.is_finite() && n.fract() == 0.0)
}

pub fn is_boolean(value: &AnyValue) -> bool {
    matches!(value, AnyValue::Bool(_))
}

pub fn is_array(value: &AnyValue) -> bool {
    matches!(value, AnyValue::Array(_))
}

/// True only for object literals, not instances, arrays, dates or regexps.
pub fn is_plain_object(value: &AnyValue) -> bool {
    matches!(value, AnyValue::Object(_))
}

/// True for every non-null reference value: objects, instances, arrays,
/// dates and regexps.
pub fn is_object(value: &AnyValue) -> bool {
    matches!(
        value,
        AnyValue::Object(_) | AnyValue::Instance { .. } | AnyValue::Array(_) | AnyValue::Date(_) | AnyValue::RegExp(_)
    )
}

pub fn is_null(value: &AnyValue) -> bool {
    matches!(value, AnyValue::Null)
}

pub fn is_undefined(value: &AnyValue) -> bool {
    matches!(value, AnyValue::Undefined)
}

/// `null` or `undefined`.
pub fn is_nil(value: &AnyValue) -> bool {
    matches!(value, AnyValue::Null | AnyValue::Undefined)
}

pub fn is_date(value: &AnyValue) -> bool {
    matches!(value, AnyValue::Date(_))
}

pub fn is_regexp(value: &AnyValue) -> bool {
    matches!(value, AnyValue::RegExp(_))
}

pub fn is_primitive(value: &AnyValue) -> bool {
    !is_object(value)
}

/// True for an instance of any class, or of `class` when given.
pub fn is_instance(value: &AnyValue, class: Option<&str>) -> bool {
    match (value, class) {
        (AnyValue::Instance { .. }, None) => true,
        (AnyValue::Instance { class: actual, .. }, Some(expected)) => actual == expected,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::RegExpValue;
    use chrono::Utc;
    use serde_json::json;

    fn samples() -> Vec<AnyValue> {
        vec![
            AnyValue::Undefined,
            AnyValue::Null,
            AnyValue::Bool(false),
            AnyValue::Number(1.5),
            AnyValue::from("s"),
            AnyValue::from(json!([1])),
            AnyValue::from(json!({"a": 1})),
            AnyValue::Date(Utc::now()),
            AnyValue::RegExp(RegExpValue::new("a", "").unwrap()),
            AnyValue::instance("Point", [("x", AnyValue::from(1))]),
        ]
    }

    #[test]
    fn test_type_of() {
        let tags: Vec<&str> = samples().iter().map(type_of).collect();
        assert_eq!(
            tags,
            vec!["undefined", "null", "boolean", "number", "string", "array", "object", "date", "regexp", "object"]
        );
    }

    #[test]
    fn test_object_family() {
        let all = samples();
        let objects: Vec<bool> = all.iter().map(is_object).collect();
        assert_eq!(objects, vec![false, false, false, false, false, true, true, true, true, true]);
        let plain: Vec<bool> = all.iter().map(is_plain_object).collect();
        assert_eq!(plain, vec![false, false, false, false, false, false, true, false, false, false]);
        assert!(all[..5].iter().all(is_primitive));
    }

    #[test]
    fn test_numbers() {
        assert!(is_number(&AnyValue::Number(f64::INFINITY)));
        assert!(!is_number(&AnyValue::Number(f64::NAN)));
        assert!(!is_number(&AnyValue::from("1")));
        assert!(is_integer(&AnyValue::from(-3)));
        assert!(!is_integer(&AnyValue::Number(1.5)));
        assert!(!is_integer(&AnyValue::Number(f64::INFINITY)));
    }

    #[test]
    fn test_nil() {
        assert!(is_nil(&AnyValue::Null));
        assert!(is_nil(&AnyValue::Undefined));
        assert!(!is_nil(&AnyValue::from(0)));
        assert!(is_null(&AnyValue::Null) && !is_null(&AnyValue::Undefined));
        assert!(is_undefined(&AnyValue::Undefined));
    }

    #[test]
    fn test_is_instance() {
        let p = AnyValue::instance("Point", Vec::<(String, AnyValue)>::new());
        assert!(is_instance(&p, None));
        assert!(is_instance(&p, Some("Point")));
        assert!(!is_instance(&p, Some("Vector")));
        assert!(!is_instance(&AnyValue::from(json!({})), None));
    }

    #[test]
    fn test_simple_predicates() {
        assert!(is_string(&AnyValue::from("")));
        assert!(is_boolean(&AnyValue::Bool(true)));
        assert!(is_array(&AnyValue::from(json!([]))));
        assert!(is_date(&AnyValue::Date(Utc::now())));
        assert!(!is_regexp(&AnyValue::from("/a/")));
    }
}
