//! Object helpers: deep clone/equal/merge, property paths and reshaping.

mod clone;
mod equal;
mod has_own;
mod merge;
mod path;
mod query;
mod transform;

pub use clone::deep_clone;
pub use equal::deep_equal;
pub use has_own::{has_own_property, has_own_property_map};
pub use merge::{deep_merge, deep_merge_all};
pub use path::{get, get_or, has_path, parse_path, set, unset, PathKey};
pub use query::{parse_query_string, to_query_string};
pub use transform::{clean, flatten_object, invert, map_values, omit, pick, unflatten_object};
