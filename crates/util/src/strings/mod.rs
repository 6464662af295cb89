//! String utilities.
//!
//! Case conversion, truncation, templating, padding, HTML escaping and a few
//! small text helpers.

mod case;
mod escape;
mod misc;
mod pad;
mod template;
mod truncate;
mod util;

pub use case::{camel_case, capitalize, constant_case, kebab_case, lower_first, pascal_case, snake_case, title_case, upper_first};
pub use escape::{escape_html, strip_html, unescape_html};
pub use misc::{count_occurrences, mask, random_string, reverse, slugify};
pub use pad::{pad_end, pad_start};
pub use template::template;
pub use truncate::{truncate, DEFAULT_ELLIPSIS};
pub use util::{is_letter, is_punctuation, is_whitespace, words, CharPredicate};
