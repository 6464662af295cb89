//! Locale tables and formatter configuration.

use crate::error::UtilError;
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Pattern used by [`super::DateFormatter::format_default`].
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Display language for month/weekday names, meridiem, relative time and
/// duration labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    ZhCn,
}

/// Unit labels for [`super::format_duration_with`], ordered year to second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationLabels {
    pub singular: [&'static str; 6],
    pub plural: [&'static str; 6],
    /// Placed between the number and its label.
    pub value_separator: &'static str,
    /// Placed between consecutive units.
    pub unit_separator: &'static str,
}

pub const EN_DURATION_LABELS: DurationLabels = DurationLabels {
    singular: ["year", "month", "day", "hour", "minute", "second"],
    plural: ["years", "months", "days", "hours", "minutes", "seconds"],
    value_separator: " ",
    unit_separator: " ",
};

pub const ZH_CN_DURATION_LABELS: DurationLabels = DurationLabels {
    singular: ["年", "个月", "天", "小时", "分钟", "秒"],
    plural: ["年", "个月", "天", "小时", "分钟", "秒"],
    value_separator: "",
    unit_separator: "",
};

/// Strings for relative time ("3 hours ago").
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RelativeLabels {
    pub future: &'static str,
    pub past: &'static str,
    pub seconds: &'static str,
    pub minute: &'static str,
    pub minutes: &'static str,
    pub hour: &'static str,
    pub hours: &'static str,
    pub day: &'static str,
    pub days: &'static str,
    pub month: &'static str,
    pub months: &'static str,
    pub year: &'static str,
    pub years: &'static str,
}

const EN_RELATIVE: RelativeLabels = RelativeLabels {
    future: "in %s",
    past: "%s ago",
    seconds: "a few seconds",
    minute: "a minute",
    minutes: "%d minutes",
    hour: "an hour",
    hours: "%d hours",
    day: "a day",
    days: "%d days",
    month: "a month",
    months: "%d months",
    year: "a year",
    years: "%d years",
};

const ZH_CN_RELATIVE: RelativeLabels = RelativeLabels {
    future: "%s后",
    past: "%s前",
    seconds: "几秒",
    minute: "1 分钟",
    minutes: "%d 分钟",
    hour: "1 小时",
    hours: "%d 小时",
    day: "1 天",
    days: "%d 天",
    month: "1 个月",
    months: "%d 个月",
    year: "1 年",
    years: "%d 年",
};

impl Locale {
    pub fn duration_labels(self) -> &'static DurationLabels {
        match self {
            Locale::En => &EN_DURATION_LABELS,
            Locale::ZhCn => &ZH_CN_DURATION_LABELS,
        }
    }

    pub(crate) fn relative_labels(self) -> &'static RelativeLabels {
        match self {
            Locale::En => &EN_RELATIVE,
            Locale::ZhCn => &ZH_CN_RELATIVE,
        }
    }

    /// Full month name, `month` is 1-based.
    pub fn month_name(self, month: u32) -> &'static str {
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December",
        ];
        const ZH: [&str; 12] = [
            "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
            "十二月",
        ];
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::En => EN[idx],
            Locale::ZhCn => ZH[idx],
        }
    }

    /// Short month name, `month` is 1-based.
    pub fn month_short(self, month: u32) -> String {
        match self {
            Locale::En => self.month_name(month)[..3].to_string(),
            Locale::ZhCn => format!("{}月", month.clamp(1, 12)),
        }
    }

    /// Full weekday name, `weekday` counts from Sunday = 0.
    pub fn weekday_name(self, weekday: u32) -> &'static str {
        const EN: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
        const ZH: [&str; 7] = ["星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六"];
        let idx = (weekday % 7) as usize;
        match self {
            Locale::En => EN[idx],
            Locale::ZhCn => ZH[idx],
        }
    }

    /// Short weekday name, `weekday` counts from Sunday = 0.
    pub fn weekday_short(self, weekday: u32) -> &'static str {
        const EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        const ZH: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];
        let idx = (weekday % 7) as usize;
        match self {
            Locale::En => EN[idx],
            Locale::ZhCn => ZH[idx],
        }
    }

    pub fn meridiem(self, hour: u32, upper: bool) -> &'static str {
        let pm = hour >= 12;
        match (self, pm, upper) {
            (Locale::En, false, true) => "AM",
            (Locale::En, true, true) => "PM",
            (Locale::En, false, false) => "am",
            (Locale::En, true, false) => "pm",
            (Locale::ZhCn, false, _) => "上午",
            (Locale::ZhCn, true, _) => "下午",
        }
    }
}

/// Configuration for [`super::DateFormatter`].
///
/// Passed explicitly at construction; nothing is registered globally.
///
/// ```
/// use utilkit::date::{DateConfig, Locale};
///
/// let config = DateConfig::from_json(r#"{"locale": "zh-cn", "utc_offset_minutes": 480}"#).unwrap();
/// assert_eq!(config.locale, Locale::ZhCn);
/// assert_eq!(config.week_starts_on, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    pub locale: Locale,
    /// Offset applied to naive inputs and to formatted output.
    pub utc_offset_minutes: i32,
    /// First day of the week, Sunday = 0 through Saturday = 6.
    pub week_starts_on: u8,
    pub default_format: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            utc_offset_minutes: 0,
            week_starts_on: 0,
            default_format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl DateConfig {
    /// Read a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, UtilError> {
        serde_json::from_str(json).map_err(|e| UtilError::InvalidConfig(e.to_string()))
    }

    /// The configured offset, clamped to less than a day either way.
    pub fn offset(&self) -> FixedOffset {
        let minutes = self.utc_offset_minutes.clamp(-MAX_OFFSET_MINUTES, MAX_OFFSET_MINUTES);
        FixedOffset::east_opt(minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    pub(crate) fn week_start(&self) -> u32 {
        u32::from(self.week_starts_on % 7)
    }
}
