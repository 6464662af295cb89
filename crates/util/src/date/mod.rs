//! Date and duration utilities.
//!
//! [`DateFormatter`] carries locale and offset configuration explicitly.
//! [`format_duration`] formats millisecond counts with fixed-size units.

mod config;
mod duration;
mod formatter;
mod range;
mod relative;

pub use config::{DateConfig, DurationLabels, Locale, DEFAULT_FORMAT, EN_DURATION_LABELS, ZH_CN_DURATION_LABELS};
pub use duration::{
    format_duration, format_duration_with, DurationOutput, DurationParts, DurationUnit, DAY_MS, HOUR_MS,
    MINUTE_MS, MONTH_MS, SECOND_MS, YEAR_MS,
};
pub use formatter::{format_date, parse_date, DateFormatter};
pub use range::{date_range, days_in_month, diff, end_of, is_leap_year, preset_range, start_of, DiffUnit, RangePreset, TimeUnit};
pub use relative::relative_time;
