/// A predicate function for checking character properties.
pub type CharPredicate = fn(char) -> bool;

/// Check if a character is a letter or digit.
///
/// # Examples
///
/// ```
/// use utilkit::strings::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('5'));
/// assert!(!is_letter('-'));
/// ```
pub fn is_letter(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// Check if a character is whitespace.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Check if a character is punctuation (not a letter or whitespace).
pub fn is_punctuation(ch: char) -> bool {
    !is_letter(ch) && !is_whitespace(ch)
}

/// Split a string into words.
///
/// Words are separated by any non-alphanumeric character, by a
/// lower-to-upper case transition (`fooBar`), by a digit-to-upper transition
/// (`v2Beta`) and at the end of an acronym (`XMLHttp` splits as `XML`,
/// `Http`).
///
/// # Examples
///
/// ```
/// use utilkit::strings::words;
///
/// assert_eq!(words("fooBar_baz-qux"), vec!["foo", "Bar", "baz", "qux"]);
/// assert_eq!(words("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
/// ```
pub fn words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if !is_letter(ch) {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() && ch.is_uppercase() {
            // `current` is non-empty, so the previous char was a letter.
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_numeric()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                out.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}
