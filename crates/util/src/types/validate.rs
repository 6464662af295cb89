//! Format checks for user-supplied strings.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://[^\s/$.?#][^\s]*$").expect("valid regex"));
static CN_MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("valid regex"));
static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("valid regex"));

/// Loose `local@domain.tld` check.
pub fn is_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// `http://` or `https://` followed by a host.
pub fn is_url(s: &str) -> bool {
    URL_RE.is_match(s)
}

/// Mainland China mobile number: 11 digits starting with `13`..`19`.
pub fn is_phone(s: &str) -> bool {
    CN_MOBILE_RE.is_match(s)
}

/// Decimal number text, optionally signed and with an exponent.
/// Surrounding whitespace is ignored.
pub fn is_numeric_str(s: &str) -> bool {
    NUMERIC_RE.is_match(s.trim())
}

/// True when `s` parses as a JSON object or array.
pub fn is_json_str(s: &str) -> bool {
    matches!(
        serde_json::from_str::<Value>(s),
        Ok(Value::Object(_) | Value::Array(_))
    )
}
