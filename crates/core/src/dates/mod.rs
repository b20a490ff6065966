//! Date and task-file path resolution.
//!
//! Everything here is a pure function of the date handed in; callers obtain
//! "now" from a [`crate::clock::Clock`].

mod progress;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};

use crate::storage::normalize_path;

pub use progress::{month_progress, year_progress};

/// Root folder used when the configured one is blank.
pub const DEFAULT_ROOT_DIR: &str = "DailyTasks";

const MONTHS_ZH: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// One icon per day of the month.
const DAY_ICONS: [&str; 31] = [
    "🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘", "🌟", "⭐", "🌈", "🌞", "🌤️", "⛅", "🌦️",
    "🌧️", "⛈️", "🌩️", "🌪️", "🌫️", "🌬️", "🍀", "🌱", "🌲", "🌳", "🌴", "🌵", "🌺", "🌻", "🌼",
    "🌸",
];

const FALLBACK_ICON: &str = "📅";

/// `YYYY-MM-DD`, zero padded.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Current logical date as `YYYY-MM-DD`.
pub fn current_date(now: NaiveDateTime) -> String {
    format_date(now.date())
}

/// Current wall-clock time as `HH:MM`.
pub fn current_time(now: NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

/// The calendar day before `date`.
pub fn yesterday(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(1)).unwrap_or(date)
}

/// `YYYY-MM-DD` of the day before `today`.
pub fn yesterday_date(today: NaiveDate) -> String {
    format_date(yesterday(today))
}

/// Month name for a zero-based month index.
///
/// Out-of-range indices wrap, so callers passing `month0()` never miss.
pub fn localized_month_name(month0: u32, english: bool) -> &'static str {
    let idx = (month0 % 12) as usize;
    if english { MONTHS_EN[idx] } else { MONTHS_ZH[idx] }
}

/// `root/YYYY/<month>.md` for the month `date` falls in.
pub fn task_file_path(root: &str, date: NaiveDate, english: bool) -> String {
    let month = localized_month_name(date.month0(), english);
    normalize_path(&format!("{}/{}/{}.md", root, date.year(), month))
}

/// Task file holding yesterday's entry.
///
/// On the 1st of a month this is the previous month's file (and on
/// January 1st, the previous year's).
pub fn yesterday_task_file_path(root: &str, today: NaiveDate, english: bool) -> String {
    task_file_path(root, yesterday(today), english)
}

/// Year folder component of the task path for `date`.
pub fn year_folder(root: &str, date: NaiveDate) -> String {
    normalize_path(&format!("{}/{}", root, date.year()))
}

/// Monday through Friday.
pub fn is_workday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn day_icon(date: NaiveDate) -> &'static str {
    DAY_ICONS.get(date.day0() as usize).copied().unwrap_or(FALLBACK_ICON)
}

/// Icon followed by the date, e.g. `🌧️ 2025-04-16`.
pub fn date_with_icon(date: NaiveDate) -> String {
    format!("{} {}", day_icon(date), format_date(date))
}
