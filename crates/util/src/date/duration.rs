//! Millisecond duration formatting.
//!
//! Durations are split into fixed-size units: a month is always 30 days and
//! a year is always 365 days. This is a display approximation, not calendar
//! arithmetic.

use super::config::{DurationLabels, EN_DURATION_LABELS};
use crate::number::round;
use std::fmt;

pub const SECOND_MS: u64 = 1000;
pub const MINUTE_MS: u64 = 60 * SECOND_MS;
pub const HOUR_MS: u64 = 60 * MINUTE_MS;
pub const DAY_MS: u64 = 24 * HOUR_MS;
pub const MONTH_MS: u64 = 30 * DAY_MS;
pub const YEAR_MS: u64 = 365 * DAY_MS;

/// A display unit of a duration, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 6] = [
        DurationUnit::Year,
        DurationUnit::Month,
        DurationUnit::Day,
        DurationUnit::Hour,
        DurationUnit::Minute,
        DurationUnit::Second,
    ];

    pub fn millis(self) -> u64 {
        match self {
            DurationUnit::Year => YEAR_MS,
            DurationUnit::Month => MONTH_MS,
            DurationUnit::Day => DAY_MS,
            DurationUnit::Hour => HOUR_MS,
            DurationUnit::Minute => MINUTE_MS,
            DurationUnit::Second => SECOND_MS,
        }
    }

    /// The template letter for this unit.
    pub fn token(self) -> char {
        match self {
            DurationUnit::Year => 'Y',
            DurationUnit::Month => 'M',
            DurationUnit::Day => 'D',
            DurationUnit::Hour => 'H',
            DurationUnit::Minute => 'm',
            DurationUnit::Second => 's',
        }
    }

    fn from_token(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.token() == ch)
    }

    fn index(self) -> usize {
        self as usize
    }
}

// Longest tokens first so `YY` is never read as two `Y`s.
const TEMPLATE_TOKENS: [(&str, DurationUnit); 12] = [
    ("YY", DurationUnit::Year),
    ("MM", DurationUnit::Month),
    ("DD", DurationUnit::Day),
    ("HH", DurationUnit::Hour),
    ("mm", DurationUnit::Minute),
    ("ss", DurationUnit::Second),
    ("Y", DurationUnit::Year),
    ("M", DurationUnit::Month),
    ("D", DurationUnit::Day),
    ("H", DurationUnit::Hour),
    ("m", DurationUnit::Minute),
    ("s", DurationUnit::Second),
];

/// A duration split into successive remainders, largest unit first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationParts {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Decompose a millisecond count. The sign is ignored and sub-second
    /// milliseconds are dropped.
    ///
    /// ```
    /// use utilkit::date::DurationParts;
    ///
    /// let parts = DurationParts::from_millis(-3_661_000);
    /// assert_eq!((parts.hours, parts.minutes, parts.seconds), (1, 1, 1));
    /// ```
    pub fn from_millis(ms: i64) -> Self {
        let mut rest = ms.unsigned_abs();
        let mut values = [0u64; 6];
        for unit in DurationUnit::ALL {
            values[unit.index()] = rest / unit.millis();
            rest %= unit.millis();
        }
        Self {
            years: values[0],
            months: values[1],
            days: values[2],
            hours: values[3],
            minutes: values[4],
            seconds: values[5],
        }
    }

    pub fn get(&self, unit: DurationUnit) -> u64 {
        match unit {
            DurationUnit::Year => self.years,
            DurationUnit::Month => self.months,
            DurationUnit::Day => self.days,
            DurationUnit::Hour => self.hours,
            DurationUnit::Minute => self.minutes,
            DurationUnit::Second => self.seconds,
        }
    }

    /// Milliseconds represented by the parts, using the fixed unit sizes.
    pub fn total_millis(&self) -> u64 {
        DurationUnit::ALL
            .into_iter()
            .map(|unit| self.get(unit) * unit.millis())
            .sum()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of [`format_duration`].
#[derive(Debug, Clone, PartialEq)]
pub enum DurationOutput {
    /// A rendered template or human readable text.
    Text(String),
    /// The whole duration expressed in a single unit.
    Total(f64),
}

impl DurationOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DurationOutput::Text(s) => Some(s),
            DurationOutput::Total(_) => None,
        }
    }

    pub fn as_total(&self) -> Option<f64> {
        match self {
            DurationOutput::Total(n) => Some(*n),
            DurationOutput::Text(_) => None,
        }
    }
}

impl fmt::Display for DurationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationOutput::Text(s) => f.write_str(s),
            DurationOutput::Total(n) => write!(f, "{n}"),
        }
    }
}

/// Format a millisecond duration with English labels.
///
/// * A template made of a single unit token (`H`, `HH`, `m`, `ss`, ...)
///   returns the whole duration in that unit, rounded to 3 decimals.
/// * Any other template has each token replaced by the matching remainder,
///   zero-padded to the token length.
/// * Without a template (or with an empty one) the non-zero units are listed
///   from years down to seconds, e.g. `"1 hour 1 minute 1 second"`.
///
/// Negative durations are formatted by absolute value.
///
/// # Examples
///
/// ```
/// use utilkit::date::{format_duration, DurationOutput};
///
/// assert_eq!(format_duration(3_661_000, Some("HH:mm:ss")).to_string(), "01:01:01");
/// assert_eq!(format_duration(5_400_000, Some("H")), DurationOutput::Total(1.5));
/// assert_eq!(format_duration(0, None).to_string(), "0 seconds");
/// assert_eq!(format_duration(-90_000, None).to_string(), "1 minute 30 seconds");
/// ```
pub fn format_duration(ms: i64, template: Option<&str>) -> DurationOutput {
    format_duration_with(ms, template, &EN_DURATION_LABELS)
}

/// [`format_duration`] with caller supplied unit labels.
pub fn format_duration_with(ms: i64, template: Option<&str>, labels: &DurationLabels) -> DurationOutput {
    match template.filter(|t| !t.is_empty()) {
        Some(template) => match single_unit(template.trim()) {
            Some(unit) => {
                let total = ms.unsigned_abs() as f64 / unit.millis() as f64;
                DurationOutput::Total(round(total, 3))
            }
            None => DurationOutput::Text(render_template(&DurationParts::from_millis(ms), template)),
        },
        None => DurationOutput::Text(humanize(&DurationParts::from_millis(ms), labels)),
    }
}

/// `Some(unit)` when the template is one unit letter, optionally doubled.
fn single_unit(template: &str) -> Option<DurationUnit> {
    let mut chars = template.chars();
    let first = chars.next()?;
    let unit = DurationUnit::from_token(first)?;
    match (chars.next(), chars.next()) {
        (None, _) => Some(unit),
        (Some(second), None) if second == first => Some(unit),
        _ => None,
    }
}

fn render_template(parts: &DurationParts, template: &str) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;
    'scan: while let Some(ch) = rest.chars().next() {
        for (token, unit) in TEMPLATE_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(&format!("{:0width$}", parts.get(unit), width = token.len()));
                rest = tail;
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

fn humanize(parts: &DurationParts, labels: &DurationLabels) -> String {
    let pieces: Vec<String> = DurationUnit::ALL
        .into_iter()
        .filter_map(|unit| {
            let value = parts.get(unit);
            (value != 0).then(|| label(value, unit, labels))
        })
        .collect();

    if pieces.is_empty() {
        return label(0, DurationUnit::Second, labels);
    }
    pieces.join(labels.unit_separator)
}

fn label(value: u64, unit: DurationUnit, labels: &DurationLabels) -> String {
    let name = if value == 1 {
        labels.singular[unit.index()]
    } else {
        labels.plural[unit.index()]
    };
    format!("{value}{}{name}", labels.value_separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::config::ZH_CN_DURATION_LABELS;

    fn text(ms: i64, template: Option<&str>) -> String {
        match format_duration(ms, template) {
            DurationOutput::Text(s) => s,
            DurationOutput::Total(n) => panic!("expected text, got total {n}"),
        }
    }

    #[test]
    fn test_parts_successive_remainders() {
        let ms = (YEAR_MS + 2 * MONTH_MS + 3 * DAY_MS + 4 * HOUR_MS + 5 * MINUTE_MS + 6 * SECOND_MS + 789) as i64;
        let parts = DurationParts::from_millis(ms);
        assert_eq!(
            parts,
            DurationParts {
                years: 1,
                months: 2,
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6
            }
        );
        assert_eq!(parts.total_millis(), ms as u64 - 789);
    }

    #[test]
    fn test_year_is_always_365_days() {
        let parts = DurationParts::from_millis(366 * DAY_MS as i64);
        assert_eq!((parts.years, parts.months, parts.days), (1, 0, 1));
    }

    #[test]
    fn test_twelve_months_are_not_a_year() {
        // 360 days: 12 fixed months, short of a 365-day year.
        let parts = DurationParts::from_millis(360 * DAY_MS as i64);
        assert_eq!((parts.years, parts.months), (0, 12));
    }

    #[test]
    fn test_composite_template() {
        assert_eq!(text(3_661_000, Some("HH:mm:ss")), "01:01:01");
        assert_eq!(text(3_661_000, Some("H:m:s")), "1:1:1");
        assert_eq!(text(90_061_000, Some("DD天HH时mm分ss秒")), "01天01时01分01秒");
    }

    #[test]
    fn test_composite_template_value_wider_than_token() {
        assert_eq!(text(100 * DAY_MS as i64, Some("MM/DD")), "03/10");
        assert_eq!(text(45 * MINUTE_MS as i64, Some("m'")), "45'");
    }

    #[test]
    fn test_composite_template_longest_match_first() {
        // "YYY" is "YY" followed by "Y".
        assert_eq!(text(2 * YEAR_MS as i64, Some("YYY")), "022");
    }

    #[test]
    fn test_composite_ignores_unknown_characters() {
        assert_eq!(text(61_000, Some("[mm] x ss!")), "[01] x 01!");
    }

    #[test]
    fn test_single_unit_total() {
        assert_eq!(format_duration(3_661_000, Some("H")), DurationOutput::Total(1.017));
        assert_eq!(format_duration(3_661_000, Some("mm")), DurationOutput::Total(61.017));
        assert_eq!(format_duration(3_661_000, Some(" ss ")), DurationOutput::Total(3661.0));
        assert_eq!(format_duration(DAY_MS as i64 * 45, Some("M")), DurationOutput::Total(1.5));
        assert_eq!(format_duration(1500, Some("s")), DurationOutput::Total(1.5));
    }

    #[test]
    fn test_mixed_letters_are_composite() {
        assert_eq!(text(3_661_000, Some("Hm")), "11");
        assert_eq!(text(3_661_000, Some("HHH")), "011");
    }

    #[test]
    fn test_humanized() {
        assert_eq!(text(0, None), "0 seconds");
        assert_eq!(text(999, None), "0 seconds");
        assert_eq!(text(1000, None), "1 second");
        assert_eq!(text(3_661_000, None), "1 hour 1 minute 1 second");
        assert_eq!(text(2 * DAY_MS as i64, None), "2 days");
        assert_eq!(text((YEAR_MS + 3 * HOUR_MS) as i64, None), "1 year 3 hours");
    }

    #[test]
    fn test_empty_template_is_humanized() {
        assert_eq!(text(60_000, Some("")), "1 minute");
    }

    #[test]
    fn test_sign_ignored() {
        for template in [None, Some("HH:mm:ss"), Some("m")] {
            assert_eq!(format_duration(-3_661_000, template), format_duration(3_661_000, template));
        }
    }

    #[test]
    fn test_custom_labels() {
        let out = format_duration_with(3_661_000, None, &ZH_CN_DURATION_LABELS);
        assert_eq!(out.to_string(), "1小时1分钟1秒");
        assert_eq!(format_duration_with(0, None, &ZH_CN_DURATION_LABELS).to_string(), "0秒");
    }

    #[test]
    fn test_output_accessors() {
        let total = format_duration(1000, Some("s"));
        assert_eq!(total.as_total(), Some(1.0));
        assert_eq!(total.as_text(), None);
        assert_eq!(total.to_string(), "1");
        let txt = format_duration(1000, None);
        assert_eq!(txt.as_text(), Some("1 second"));
    }
}
