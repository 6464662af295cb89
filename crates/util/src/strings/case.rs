//! Case conversion.

use super::util::words;

/// Upper-case the first character and lower-case the rest.
///
/// # Examples
///
/// ```
/// use utilkit::strings::capitalize;
///
/// assert_eq!(capitalize("hELLO"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Upper-case only the first character.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case only the first character.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert to `camelCase`.
///
/// # Examples
///
/// ```
/// use utilkit::strings::camel_case;
///
/// assert_eq!(camel_case("Foo Bar"), "fooBar");
/// assert_eq!(camel_case("--foo-bar--"), "fooBar");
/// assert_eq!(camel_case("__FOO_BAR__"), "fooBar");
/// ```
pub fn camel_case(s: &str) -> String {
    words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
        .collect()
}

/// Convert to `PascalCase`.
pub fn pascal_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert to `snake_case`.
///
/// ```
/// use utilkit::strings::snake_case;
///
/// assert_eq!(snake_case("fooBar"), "foo_bar");
/// ```
pub fn snake_case(s: &str) -> String {
    join_lower(s, "_")
}

/// Convert to `kebab-case`.
pub fn kebab_case(s: &str) -> String {
    join_lower(s, "-")
}

/// Convert to `CONSTANT_CASE`.
pub fn constant_case(s: &str) -> String {
    words(s).iter().map(|w| w.to_uppercase()).collect::<Vec<_>>().join("_")
}

/// Convert to `Title Case`.
pub fn title_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect::<Vec<_>>().join(" ")
}

fn join_lower(s: &str, sep: &str) -> String {
    words(s).iter().map(|w| w.to_lowercase()).collect::<Vec<_>>().join(sep)
}
