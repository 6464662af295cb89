use rand::Rng;

/// Lenient numeric parse.
///
/// Surrounding whitespace and `,` thousands separators are ignored.
/// Returns `None` for empty, non-numeric or non-finite input.
///
/// ```
/// use utilkit::number::to_number;
///
/// assert_eq!(to_number(" 1,234.5 "), Some(1234.5));
/// assert_eq!(to_number("abc"), None);
/// ```
pub fn to_number(s: &str) -> Option<f64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Random integer in `[min, max]`. Reversed bounds are swapped.
pub fn random_int(min: i64, max: i64) -> i64 {
    let (lo, hi) = if min > max { (max, min) } else { (min, max) };
    rand::thread_rng().gen_range(lo..=hi)
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean; `0.0` for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}
