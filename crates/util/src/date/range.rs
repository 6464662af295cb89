//! Calendar ranges: unit boundaries, presets, day lists and differences.

use super::formatter::at_offset;
use chrono::{DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, NaiveTime, TimeDelta};
use serde::Deserialize;

/// Calendar unit for [`start_of`] and [`end_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Day,
    Week,
    Month,
    Year,
}

/// Unit for [`diff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Named ranges relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePreset {
    Today,
    Yesterday,
    Last7Days,
    Last30Days,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
}

/// First instant of the unit containing `date`, in `date`'s offset.
///
/// `week_start` counts from Sunday = 0.
pub fn start_of(date: &DateTime<FixedOffset>, unit: TimeUnit, week_start: u32) -> DateTime<FixedOffset> {
    let day = date.date_naive();
    let first = match unit {
        TimeUnit::Day => day,
        TimeUnit::Week => {
            let back = (day.weekday().num_days_from_sunday() + 7 - week_start % 7) % 7;
            day - Days::new(u64::from(back))
        }
        TimeUnit::Month => day - Days::new(u64::from(day.day0())),
        TimeUnit::Year => day - Days::new(u64::from(day.ordinal0())),
    };
    at_offset(first.and_time(NaiveTime::MIN), *date.offset())
}

/// Last millisecond of the unit containing `date`.
pub fn end_of(date: &DateTime<FixedOffset>, unit: TimeUnit, week_start: u32) -> DateTime<FixedOffset> {
    let start = start_of(date, unit, week_start);
    let next = match unit {
        TimeUnit::Day => start + Days::new(1),
        TimeUnit::Week => start + Days::new(7),
        TimeUnit::Month => start + Months::new(1),
        TimeUnit::Year => start + Months::new(12),
    };
    next - TimeDelta::milliseconds(1)
}

/// Start and end of a named range around `now`.
///
/// ```
/// use utilkit::date::{parse_date, preset_range, RangePreset};
///
/// let now = parse_date("2024-03-15 10:30:00").unwrap();
/// let (start, end) = preset_range(RangePreset::LastMonth, &now, 0);
/// assert_eq!(start.to_rfc3339(), "2024-02-01T00:00:00+00:00");
/// assert_eq!(end.format("%Y-%m-%d %H:%M:%S%.3f").to_string(), "2024-02-29 23:59:59.999");
/// ```
pub fn preset_range(
    preset: RangePreset,
    now: &DateTime<FixedOffset>,
    week_start: u32,
) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    let span = |from: DateTime<FixedOffset>, to: DateTime<FixedOffset>, unit: TimeUnit| {
        (start_of(&from, unit, week_start), end_of(&to, unit, week_start))
    };
    match preset {
        RangePreset::Today => span(*now, *now, TimeUnit::Day),
        RangePreset::Yesterday => {
            let day = *now - Days::new(1);
            span(day, day, TimeUnit::Day)
        }
        RangePreset::Last7Days => span(*now - Days::new(6), *now, TimeUnit::Day),
        RangePreset::Last30Days => span(*now - Days::new(29), *now, TimeUnit::Day),
        RangePreset::ThisWeek => span(*now, *now, TimeUnit::Week),
        RangePreset::LastWeek => {
            let day = *now - Days::new(7);
            span(day, day, TimeUnit::Week)
        }
        RangePreset::ThisMonth => span(*now, *now, TimeUnit::Month),
        RangePreset::LastMonth => {
            let day = start_of(now, TimeUnit::Month, week_start) - Days::new(1);
            span(day, day, TimeUnit::Month)
        }
        RangePreset::ThisYear => span(*now, *now, TimeUnit::Year),
    }
}

/// Every `step_days`-th calendar day from `start` through `end`, inclusive.
///
/// A zero step is treated as one; a reversed range is empty.
///
/// ```
/// use chrono::NaiveDate;
/// use utilkit::date::date_range;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let days: Vec<String> = date_range(start, end, 1).iter().map(|d| d.to_string()).collect();
/// assert_eq!(days, ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]);
/// ```
pub fn date_range(start: NaiveDate, end: NaiveDate, step_days: u64) -> Vec<NaiveDate> {
    let step = Days::new(step_days.max(1));
    let mut out = Vec::new();
    let mut current = start;
    while current <= end {
        out.push(current);
        match current.checked_add_days(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    out
}

/// `a - b` in whole units, truncated toward zero.
///
/// Months and years are calendar based: a month has passed once the same
/// day-of-month and time is reached again, with the day clamped to the end
/// of shorter months.
pub fn diff(a: &DateTime<FixedOffset>, b: &DateTime<FixedOffset>, unit: DiffUnit) -> i64 {
    let ms = a.timestamp_millis() - b.timestamp_millis();
    match unit {
        DiffUnit::Millisecond => ms,
        DiffUnit::Second => ms / 1000,
        DiffUnit::Minute => ms / 60_000,
        DiffUnit::Hour => ms / 3_600_000,
        DiffUnit::Day => ms / 86_400_000,
        DiffUnit::Week => ms / (7 * 86_400_000),
        DiffUnit::Month => month_diff(a, b),
        DiffUnit::Year => month_diff(a, b) / 12,
    }
}

/// Whole calendar months from `b` to `a`. The anchor day is clamped to the
/// length of the target month, so Jan 31 to Feb 29 counts as one month.
fn month_diff(a: &DateTime<FixedOffset>, b: &DateTime<FixedOffset>) -> i64 {
    if a < b {
        return -month_diff(b, a);
    }
    let later = a.naive_local();
    let earlier = b.with_timezone(a.offset()).naive_local();
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    let anchor_day = earlier.day().min(days_in_month(later.year(), later.month()));
    if (later.day(), later.time()) < (anchor_day, earlier.time()) {
        months -= 1;
    }
    months
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a 1-based month; `0` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
