/// Pad the start of `s` with `fill` until it is `length` chars long.
///
/// The fill string is repeated and cut to fit. An empty fill or a string that
/// is already long enough is returned unchanged.
///
/// ```
/// use utilkit::strings::pad_start;
///
/// assert_eq!(pad_start("5", 3, "0"), "005");
/// assert_eq!(pad_start("abc", 8, "xy"), "xyxyxabc");
/// ```
pub fn pad_start(s: &str, length: usize, fill: &str) -> String {
    let padding = make_padding(s, length, fill);
    padding + s
}

/// Pad the end of `s` with `fill` until it is `length` chars long.
pub fn pad_end(s: &str, length: usize, fill: &str) -> String {
    let padding = make_padding(s, length, fill);
    let mut out = s.to_string();
    out.push_str(&padding);
    out
}

fn make_padding(s: &str, length: usize, fill: &str) -> String {
    let current = s.chars().count();
    if fill.is_empty() || current >= length {
        return String::new();
    }
    fill.chars().cycle().take(length - current).collect()
}
