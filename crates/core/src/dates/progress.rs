use chrono::{Datelike, NaiveDate};

/// Percentage of the year elapsed at `date`, in whole days.
pub fn year_progress(date: NaiveDate) -> u32 {
    let start = NaiveDate::from_ymd_opt(date.year(), 1, 1);
    let end = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1);
    match (start, end) {
        (Some(start), Some(end)) => percent(date, start, end),
        _ => 0,
    }
}

/// Percentage of the month elapsed at `date`, in whole days.
pub fn month_progress(date: NaiveDate) -> u32 {
    let start = date.with_day(1);
    let end = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    match (start, end) {
        (Some(start), Some(end)) => percent(date, start, end),
        _ => 0,
    }
}

fn percent(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> u32 {
    let total = (end - start).num_days();
    if total <= 0 {
        return 0;
    }
    let passed = (date - start).num_days();
    ((passed as f64 / total as f64) * 100.0).round() as u32
}
