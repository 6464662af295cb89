use rand::distributions::Alphanumeric;
use rand::Rng;

/// Reverse a string by `char`.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Count non-overlapping occurrences of `needle`. An empty needle counts zero.
pub fn count_occurrences(s: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    s.matches(needle).count()
}

/// Hide the middle of a string, keeping `start` leading and `end` trailing
/// characters.
///
/// Strings too short to hide anything are returned unchanged.
///
/// # Examples
///
/// ```
/// use utilkit::strings::mask;
///
/// assert_eq!(mask("13812345678", 3, 4, '*'), "138****5678");
/// assert_eq!(mask("abc", 2, 2, '*'), "abc");
/// ```
pub fn mask(s: &str, start: usize, end: usize, mask_char: char) -> String {
    let chars: Vec<char> = s.chars().collect();
    if start.saturating_add(end) >= chars.len() {
        return s.to_string();
    }
    let hidden = chars.len() - start - end;
    chars[..start]
        .iter()
        .copied()
        .chain(std::iter::repeat(mask_char).take(hidden))
        .chain(chars[chars.len() - end..].iter().copied())
        .collect()
}

/// Lower-case, ASCII-only, dash separated identifier.
///
/// ```
/// use utilkit::strings::slugify;
///
/// assert_eq!(slugify("  Hello, World! 2024 "), "hello-world-2024");
/// ```
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_dash = false;
    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Random alphanumeric string of `len` characters.
pub fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("abc"), "cba");
        assert_eq!(reverse("日本"), "本日");
    }

    #[test]
    fn test_count_occurrences() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("hello", "l"), 2);
        assert_eq!(count_occurrences("hello", ""), 0);
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("secret", 1, 1, '#'), "s####t");
        assert_eq!(mask("secret", 0, 0, '*'), "******");
        assert_eq!(mask("", 0, 0, '*'), "");
        assert_eq!(mask("secret", usize::MAX, 1, '*'), "secret");
        assert_eq!(mask("secret", 1, usize::MAX, '*'), "secret");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Rust is --fun--"), "rust-is-fun");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_random_string() {
        let s = random_string(16);
        assert_eq!(s.len(), 16);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(random_string(0), "");
    }
}
