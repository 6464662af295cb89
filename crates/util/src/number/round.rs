//! Decimal rounding and range normalisation.

/// Round half away from zero to `precision` decimal places.
///
/// Negative precision rounds to tens, hundreds, and so on. The scaling is
/// done through the decimal exponent so values such as `1.005` round the way
/// they read rather than the way they are stored.
///
/// # Examples
///
/// ```
/// use utilkit::number::round;
///
/// assert_eq!(round(1.005, 2), 1.01);
/// assert_eq!(round(-2.5, 0), -3.0);
/// assert_eq!(round(1234.0, -2), 1200.0);
/// ```
pub fn round(n: f64, precision: i32) -> f64 {
    shift(n, precision, f64::round)
}

/// Round toward negative infinity at `precision` decimal places.
pub fn floor_to(n: f64, precision: i32) -> f64 {
    shift(n, precision, f64::floor)
}

/// Round toward positive infinity at `precision` decimal places.
pub fn ceil_to(n: f64, precision: i32) -> f64 {
    shift(n, precision, f64::ceil)
}

fn shift(n: f64, precision: i32, op: fn(f64) -> f64) -> f64 {
    if !n.is_finite() {
        return n;
    }
    let scaled = match format!("{n}e{precision}").parse::<f64>() {
        Ok(v) => op(v),
        Err(_) => return n,
    };
    format!("{scaled}e{}", -precision).parse::<f64>().unwrap_or(n)
}

/// Constrain `n` to `[min, max]`.
///
/// Reversed bounds are swapped rather than rejected and a NaN input is
/// returned as the lower bound.
///
/// ```
/// use utilkit::number::clamp;
///
/// assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
/// assert_eq!(clamp(5.0, 10.0, 0.0), 5.0);
/// ```
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min > max { (max, min) } else { (min, max) };
    if n.is_nan() {
        return lo;
    }
    n.max(lo).min(hi)
}

/// Whether `n` lies in the half-open range `[start, end)`. Reversed bounds are
/// swapped.
pub fn in_range(n: f64, start: f64, end: f64) -> bool {
    let (lo, hi) = if start > end { (end, start) } else { (start, end) };
    n >= lo && n < hi
}
