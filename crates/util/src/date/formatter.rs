//! Date parsing and pattern formatting.

use super::config::{DateConfig, Locale};
use super::range::{self, DiffUnit, TimeUnit};
use super::relative::relative_time;
use crate::error::UtilError;
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};

const NAIVE_DATE_TIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M",
];

const NAIVE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

// Longest tokens first; `[...]` escapes are handled before token matching.
const FORMAT_TOKENS: [&str; 25] = [
    "YYYY", "MMMM", "dddd", "MMM", "ddd", "SSS", "YY", "MM", "DD", "HH", "hh", "mm", "ss", "ZZ",
    "M", "D", "d", "H", "h", "m", "s", "A", "a", "Q", "Z",
];

/// Parses and formats dates for one locale and UTC offset.
///
/// All configuration is injected through [`DateConfig`]; creating a formatter
/// has no global side effects.
///
/// # Examples
///
/// ```
/// use utilkit::date::{DateConfig, DateFormatter, Locale};
///
/// let formatter = DateFormatter::new(DateConfig {
///     locale: Locale::En,
///     utc_offset_minutes: 8 * 60,
///     ..DateConfig::default()
/// });
///
/// let date = formatter.parse("2024-03-05T14:07:09Z").unwrap();
/// assert_eq!(formatter.format(&date, "YYYY-MM-DD HH:mm:ss"), "2024-03-05 22:07:09");
/// assert_eq!(formatter.format(&date, "ddd, MMM D [at] h:mm A"), "Tue, Mar 5 at 10:07 PM");
/// assert!(formatter.parse("not a date").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateFormatter {
    config: DateConfig,
}

impl DateFormatter {
    pub fn new(config: DateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DateConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn offset(&self) -> FixedOffset {
        self.config.offset()
    }

    /// Current time in the configured offset.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset())
    }

    /// Parse a date string.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD[ T]HH:mm[:ss[.SSS]]`, `YYYY/MM/DD HH:mm[:ss]`,
    /// `YYYY-MM-DD`, `YYYY/MM/DD` and integer epoch milliseconds. Inputs
    /// without an offset are read in the configured offset.
    ///
    /// # Errors
    ///
    /// [`UtilError::InvalidDate`] for anything else.
    pub fn parse(&self, input: &str) -> Result<DateTime<FixedOffset>, UtilError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(UtilError::InvalidDate);
        }
        let offset = self.offset();

        if is_epoch_millis(input) {
            let millis: i64 = input.parse().map_err(|_| UtilError::InvalidDate)?;
            return DateTime::<Utc>::from_timestamp_millis(millis)
                .map(|utc| utc.with_timezone(&offset))
                .ok_or(UtilError::InvalidDate);
        }
        if let Ok(date) = DateTime::parse_from_rfc3339(input) {
            return Ok(date);
        }
        for format in NAIVE_DATE_TIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(at_offset(naive, offset));
            }
        }
        for format in NAIVE_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(input, format) {
                return Ok(at_offset(date.and_time(NaiveTime::MIN), offset));
            }
        }
        Err(UtilError::InvalidDate)
    }

    /// Render `date` in the configured offset using a pattern.
    ///
    /// | token | output |
    /// |---|---|
    /// | `YYYY` / `YY` | year, 4 / 2 digits |
    /// | `MMMM` / `MMM` / `MM` / `M` | month name, short name, 2 digits, number |
    /// | `DD` / `D` | day of month |
    /// | `dddd` / `ddd` / `d` | weekday name, short name, number (Sunday = 0) |
    /// | `HH` / `H`, `hh` / `h` | 24-hour and 12-hour clock |
    /// | `mm` / `m`, `ss` / `s`, `SSS` | minutes, seconds, milliseconds |
    /// | `A` / `a` | meridiem |
    /// | `Q` | quarter |
    /// | `Z` / `ZZ` | offset as `+08:00` / `+0800` |
    ///
    /// Text inside `[...]` is copied verbatim.
    pub fn format<Tz: TimeZone>(&self, date: &DateTime<Tz>, pattern: &str) -> String {
        let local = date.with_timezone(&self.offset());
        let mut out = String::with_capacity(pattern.len() + 8);
        let mut rest = pattern;

        'scan: while let Some(ch) = rest.chars().next() {
            if ch == '[' {
                if let Some(end) = rest.find(']') {
                    out.push_str(&rest[1..end]);
                    rest = &rest[end + 1..];
                    continue;
                }
            }
            for token in FORMAT_TOKENS {
                if let Some(tail) = rest.strip_prefix(token) {
                    self.push_token(&mut out, &local, token);
                    rest = tail;
                    continue 'scan;
                }
            }
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
        out
    }

    /// Format with [`DateConfig::default_format`].
    pub fn format_default<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
        self.format(date, &self.config.default_format)
    }

    /// Parse then format in one step.
    pub fn reformat(&self, input: &str, pattern: &str) -> Result<String, UtilError> {
        let date = self.parse(input)?;
        Ok(self.format(&date, pattern))
    }

    /// Format both ends of a range joined by `separator`.
    ///
    /// ```
    /// use utilkit::date::DateFormatter;
    ///
    /// let f = DateFormatter::default();
    /// let start = f.parse("2024-01-01").unwrap();
    /// let end = f.parse("2024-01-07").unwrap();
    /// assert_eq!(f.format_range(&start, &end, "MM/DD", " ~ "), "01/01 ~ 01/07");
    /// ```
    pub fn format_range<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
        pattern: &str,
        separator: &str,
    ) -> String {
        format!("{}{separator}{}", self.format(start, pattern), self.format(end, pattern))
    }

    /// Relative description of `date` as seen from `now`.
    pub fn from_now<Tz: TimeZone, Tz2: TimeZone>(&self, date: &DateTime<Tz>, now: &DateTime<Tz2>) -> String {
        let diff = date.timestamp_millis() - now.timestamp_millis();
        relative_time(diff, self.config.locale)
    }

    /// Start of the day/week/month/year, honouring `week_starts_on`.
    pub fn start_of(&self, date: &DateTime<FixedOffset>, unit: TimeUnit) -> DateTime<FixedOffset> {
        range::start_of(date, unit, self.config.week_start())
    }

    /// Last millisecond of the day/week/month/year.
    pub fn end_of(&self, date: &DateTime<FixedOffset>, unit: TimeUnit) -> DateTime<FixedOffset> {
        range::end_of(date, unit, self.config.week_start())
    }

    pub fn preset_range(
        &self,
        preset: range::RangePreset,
        now: &DateTime<FixedOffset>,
    ) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
        range::preset_range(preset, now, self.config.week_start())
    }

    pub fn diff(&self, a: &DateTime<FixedOffset>, b: &DateTime<FixedOffset>, unit: DiffUnit) -> i64 {
        range::diff(a, b, unit)
    }

    fn push_token(&self, out: &mut String, date: &DateTime<FixedOffset>, token: &str) {
        let locale = self.config.locale;
        let weekday = date.weekday().num_days_from_sunday();
        let (_, hour12) = date.hour12();
        match token {
            "YYYY" => out.push_str(&format!("{:04}", date.year())),
            "YY" => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
            "MMMM" => out.push_str(locale.month_name(date.month())),
            "MMM" => out.push_str(&locale.month_short(date.month())),
            "MM" => out.push_str(&format!("{:02}", date.month())),
            "M" => out.push_str(&date.month().to_string()),
            "DD" => out.push_str(&format!("{:02}", date.day())),
            "D" => out.push_str(&date.day().to_string()),
            "dddd" => out.push_str(locale.weekday_name(weekday)),
            "ddd" => out.push_str(locale.weekday_short(weekday)),
            "d" => out.push_str(&weekday.to_string()),
            "HH" => out.push_str(&format!("{:02}", date.hour())),
            "H" => out.push_str(&date.hour().to_string()),
            "hh" => out.push_str(&format!("{hour12:02}")),
            "h" => out.push_str(&hour12.to_string()),
            "mm" => out.push_str(&format!("{:02}", date.minute())),
            "m" => out.push_str(&date.minute().to_string()),
            "ss" => out.push_str(&format!("{:02}", date.second())),
            "s" => out.push_str(&date.second().to_string()),
            "SSS" => out.push_str(&format!("{:03}", date.timestamp_subsec_millis().min(999))),
            "A" => out.push_str(locale.meridiem(date.hour(), true)),
            "a" => out.push_str(locale.meridiem(date.hour(), false)),
            "Q" => out.push_str(&((date.month() - 1) / 3 + 1).to_string()),
            "Z" => out.push_str(&format_offset(date.offset(), ":")),
            "ZZ" => out.push_str(&format_offset(date.offset(), "")),
            other => out.push_str(other),
        }
    }
}

/// Attach `offset` to a wall-clock time.
pub(crate) fn at_offset(naive: NaiveDateTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    let utc = naive - chrono::TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}

fn is_epoch_millis(input: &str) -> bool {
    let digits = input.strip_prefix('-').unwrap_or(input);
    // Eight digits or fewer would be ambiguous with compact dates such as 20240101.
    digits.len() > 8 && digits.bytes().all(|b| b.is_ascii_digit())
}

fn format_offset(offset: &FixedOffset, separator: &str) -> String {
    let secs = offset.local_minus_utc();
    let sign = if secs < 0 { '-' } else { '+' };
    let secs = secs.unsigned_abs();
    format!("{sign}{:02}{separator}{:02}", secs / 3600, secs % 3600 / 60)
}

/// Parse with the default (UTC, English) formatter.
///
/// ```
/// use utilkit::date::parse_date;
///
/// assert!(parse_date("2024-02-30").is_err());
/// assert_eq!(parse_date("garbage").unwrap_err().to_string(), "Invalid date");
/// ```
pub fn parse_date(input: &str) -> Result<DateTime<FixedOffset>, UtilError> {
    DateFormatter::default().parse(input)
}

/// Format with the default (UTC, English) formatter.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, pattern: &str) -> String {
    DateFormatter::default().format(date, pattern)
}
