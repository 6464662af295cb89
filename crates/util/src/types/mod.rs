//! Runtime type checks, string format validators and lenient JSON parsing.

mod empty;
mod json;
mod predicates;
mod validate;

pub use empty::is_empty;
pub use json::parse_json_str;
pub use predicates::{
    is_array, is_boolean, is_date, is_instance, is_integer, is_nil, is_null, is_number, is_object, is_plain_object,
    is_primitive, is_regexp, is_string, is_undefined, type_of,
};
pub use validate::{is_email, is_json_str, is_numeric_str, is_phone, is_url};
