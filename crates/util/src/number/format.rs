//! Display formatting for numbers.

use super::round::round;
use serde::Deserialize;

const BYTE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Insert a separator between every group of three integer digits.
///
/// With `decimals` set, the value is first rounded (half away from zero) and
/// printed with exactly that many fraction digits; with `None` the shortest
/// representation of the value is kept.
///
/// # Examples
///
/// ```
/// use utilkit::number::format_thousands;
///
/// assert_eq!(format_thousands(1234567.891, Some(2), ","), "1,234,567.89");
/// assert_eq!(format_thousands(-1234.5, None, ","), "-1,234.5");
/// assert_eq!(format_thousands(999.0, Some(0), ","), "999");
/// ```
pub fn format_thousands(n: f64, decimals: Option<u32>, separator: &str) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let text = match decimals {
        Some(d) => format!("{:.*}", d as usize, round(n, d as i32)),
        None => n.to_string(),
    };
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 * separator.len());
    out.push_str(sign);
    out.push_str(&group_digits(int_part, separator));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Options for [`format_currency`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrencyOptions {
    /// Currency symbol. Default is `"$"`.
    pub symbol: String,
    /// Fraction digits. Default is 2.
    pub decimals: u32,
    /// Thousands separator. Default is `","`.
    pub separator: String,
    /// Put the symbol after the amount (`"12.00 €"`).
    pub symbol_after: bool,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimals: 2,
            separator: ",".to_string(),
            symbol_after: false,
        }
    }
}

/// Format an amount of money.
///
/// The minus sign of a negative amount always comes first.
///
/// ```
/// use utilkit::number::{format_currency, CurrencyOptions};
///
/// let opts = CurrencyOptions::default();
/// assert_eq!(format_currency(1234.5, &opts), "$1,234.50");
/// assert_eq!(format_currency(-0.5, &opts), "-$0.50");
/// ```
pub fn format_currency(n: f64, options: &CurrencyOptions) -> String {
    let body = format_thousands(n.abs(), Some(options.decimals), &options.separator);
    let sign = if n < 0.0 && round(n, options.decimals as i32) != 0.0 {
        "-"
    } else {
        ""
    };
    if options.symbol_after {
        format!("{sign}{body} {}", options.symbol)
    } else {
        format!("{sign}{}{body}", options.symbol)
    }
}

/// Format a ratio as a percentage, `0.256` -> `"25.6%"`.
pub fn format_percent(ratio: f64, decimals: u32) -> String {
    format!("{:.*}%", decimals as usize, round(ratio * 100.0, decimals as i32))
}

/// Human readable byte size using 1024-based units.
///
/// Trailing zeros in the fraction are dropped.
///
/// ```
/// use utilkit::number::format_bytes;
///
/// assert_eq!(format_bytes(0, 2), "0 B");
/// assert_eq!(format_bytes(1536, 2), "1.5 KB");
/// assert_eq!(format_bytes(1048576, 2), "1 MB");
/// ```
pub fn format_bytes(bytes: u64, decimals: u32) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", round(value, decimals as i32), BYTE_UNITS[unit])
}
