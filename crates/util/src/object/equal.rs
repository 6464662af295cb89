use crate::value::AnyValue;

/// Performs a structural equality check between two runtime values.
///
/// - `NaN` equals `NaN`
/// - Objects compare by key set and values, ignoring key order
/// - Dates compare by instant, regular expressions by source and flags
/// - Instances are equal only to instances of the same class
/// - A plain object never equals an instance
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilkit::object::deep_equal;
/// use utilkit::AnyValue;
///
/// let a = AnyValue::from(json!({"foo": [1, 2, 3], "bar": 1}));
/// let b = AnyValue::from(json!({"bar": 1, "foo": [1, 2, 3]}));
/// assert!(deep_equal(&a, &b));
/// ```
pub fn deep_equal(a: &AnyValue, b: &AnyValue) -> bool {
    match (a, b) {
        (AnyValue::Undefined, AnyValue::Undefined) => true,
        (AnyValue::Null, AnyValue::Null) => true,
        (AnyValue::Bool(a), AnyValue::Bool(b)) => a == b,
        (AnyValue::Number(a), AnyValue::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
        (AnyValue::String(a), AnyValue::String(b)) => a == b,
        (AnyValue::Date(a), AnyValue::Date(b)) => a == b,
        (AnyValue::RegExp(a), AnyValue::RegExp(b)) => a == b,

        (AnyValue::Array(arr_a), AnyValue::Array(arr_b)) => {
            arr_a.len() == arr_b.len() && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        (AnyValue::Object(obj_a), AnyValue::Object(obj_b)) => fields_equal(obj_a, obj_b),
        (
            AnyValue::Instance { class: class_a, fields: obj_a },
            AnyValue::Instance { class: class_b, fields: obj_b },
        ) => class_a == class_b && fields_equal(obj_a, obj_b),

        _ => false,
    }
}

fn fields_equal(a: &crate::value::Fields, b: &crate::value::Fields) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|(key, val_a)| match b.get(key) {
        Some(val_b) => deep_equal(val_a, val_b),
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitives() {
        assert!(deep_equal(&AnyValue::Null, &AnyValue::Null));
        assert!(!deep_equal(&AnyValue::Null, &AnyValue::Undefined));
        assert!(deep_equal(&AnyValue::Number(f64::NAN), &AnyValue::Number(f64::NAN)));
        assert!(!deep_equal(&AnyValue::from(1), &AnyValue::from("1")));
    }

    #[test]
    fn test_arrays_are_order_sensitive() {
        let a = AnyValue::from(json!([1, 2]));
        let b = AnyValue::from(json!([2, 1]));
        assert!(!deep_equal(&a, &b));
        assert!(!deep_equal(&a, &AnyValue::from(json!([1, 2, 3]))));
    }

    #[test]
    fn test_objects() {
        let a = AnyValue::from(json!({"a": {"b": 1}}));
        assert!(deep_equal(&a, &AnyValue::from(json!({"a": {"b": 1}}))));
        assert!(!deep_equal(&a, &AnyValue::from(json!({"a": {"b": 2}}))));
        assert!(!deep_equal(&a, &AnyValue::from(json!({"a": {"b": 1}, "c": 1}))));
        assert!(!deep_equal(&AnyValue::from(json!({"a": 1})), &AnyValue::from(json!({"b": 1}))));
    }

    #[test]
    fn test_instances() {
        let p1 = AnyValue::instance("Point", [("x", AnyValue::from(1))]);
        let p2 = AnyValue::instance("Point", [("x", AnyValue::from(1))]);
        let v = AnyValue::instance("Vector", [("x", AnyValue::from(1))]);
        let plain = AnyValue::object([("x", AnyValue::from(1))]);
        assert!(deep_equal(&p1, &p2));
        assert!(!deep_equal(&p1, &v));
        assert!(!deep_equal(&p1, &plain));
    }
}
