/// Default suffix appended by [`truncate`].
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Shorten a string to at most `length` characters.
///
/// Strings whose length is already `<= length` are returned unchanged.
/// Otherwise the first `length - ellipsis.len()` characters are kept and the
/// ellipsis appended. Lengths are counted in `char`s.
///
/// # Examples
///
/// ```
/// use utilkit::strings::truncate;
///
/// assert_eq!(truncate("12345678901234567890", 10, None), "1234567...");
/// assert_eq!(truncate("short", 10, None), "short");
/// assert_eq!(truncate("hello world", 8, Some("…")), "hello w…");
/// ```
pub fn truncate(s: &str, length: usize, ellipsis: Option<&str>) -> String {
    let ellipsis = ellipsis.unwrap_or(DEFAULT_ELLIPSIS);
    if s.chars().count() <= length {
        return s.to_string();
    }
    let keep = length.saturating_sub(ellipsis.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ellipsis);
    out
}
