//! Relative time ("3 hours ago", "in a minute").

use super::config::Locale;

/// Describe a signed millisecond offset from "now".
///
/// Positive offsets are in the future. Thresholds: under 45 s is "a few
/// seconds", under 90 s "a minute", under 45 min counts minutes, under 90 min
/// "an hour", under 22 h counts hours, under 36 h "a day", under 26 d counts
/// days, under 46 d "a month", under 11 months counts months, under 18 months
/// "a year", beyond that counts years. Counts are rounded to the nearest whole
/// unit.
///
/// # Examples
///
/// ```
/// use utilkit::date::{relative_time, Locale};
///
/// assert_eq!(relative_time(-3 * 3_600_000, Locale::En), "3 hours ago");
/// assert_eq!(relative_time(60_000, Locale::En), "in a minute");
/// assert_eq!(relative_time(-5 * 86_400_000, Locale::ZhCn), "5 天前");
/// ```
pub fn relative_time(diff_ms: i64, locale: Locale) -> String {
    let labels = locale.relative_labels();
    let abs = diff_ms.unsigned_abs() as f64;

    let seconds = (abs / 1000.0).round();
    let minutes = (abs / 60_000.0).round();
    let hours = (abs / 3_600_000.0).round();
    let days = (abs / 86_400_000.0).round();
    let months = (abs / (30.0 * 86_400_000.0)).round();
    let years = (abs / (365.0 * 86_400_000.0)).round();

    let phrase = if seconds < 45.0 {
        labels.seconds.to_string()
    } else if seconds < 90.0 {
        labels.minute.to_string()
    } else if minutes < 45.0 {
        count(labels.minutes, minutes)
    } else if minutes < 90.0 {
        labels.hour.to_string()
    } else if hours < 22.0 {
        count(labels.hours, hours)
    } else if hours < 36.0 {
        labels.day.to_string()
    } else if days < 26.0 {
        count(labels.days, days)
    } else if days < 46.0 {
        labels.month.to_string()
    } else if months < 11.0 {
        count(labels.months, months.max(2.0))
    } else if months < 18.0 {
        labels.year.to_string()
    } else {
        count(labels.years, years.max(2.0))
    };

    let wrapper = if diff_ms > 0 { labels.future } else { labels.past };
    wrapper.replace("%s", &phrase)
}

fn count(pattern: &str, n: f64) -> String {
    pattern.replace("%d", &format!("{}", n as u64))
}
