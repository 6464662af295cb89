//! utilkit - Small stateless helpers
//!
//! String, number, date/duration, array, object and runtime type utilities.
//! JSON-shaped data goes through [`serde_json::Value`]; values that JSON cannot
//! express (dates, regexps, class instances, `undefined`) use [`AnyValue`].

pub mod array;
pub mod date;
pub mod error;
pub mod number;
pub mod object;
pub mod strings;
pub mod types;
pub mod value;

// Re-exports for convenience
pub use array::{chunk, group_by, list_to_tree, unique};
pub use date::{format_duration, DateConfig, DateFormatter, DurationOutput, Locale};
pub use error::UtilError;
pub use object::{deep_clone, deep_equal, deep_merge, get, set};
pub use strings::{camel_case, kebab_case, snake_case, template, truncate};
pub use types::{is_empty, parse_json_str, type_of};
pub use value::{AnyValue, RegExpValue};
