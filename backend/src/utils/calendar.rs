//! Calendar-day helpers and Indonesian date formatting.
//!
//! Everything here works on [`NaiveDate`]: holidays are local calendar days,
//! so no timezone conversion ever happens.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

const DAY_NAMES: [&str; 7] = [
    "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Parses a holiday date.
///
/// Accepts the upstream year-first form (`2025-1-1`, `2025-01-01`) and the
/// day-first form (`1-1-2025`); `/` works as a separator too. The four-digit
/// component is the year. Returns `None` for anything else, including
/// dates that do not exist.
pub fn parse_holiday_date(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.trim().split(['-', '/']).collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };

    let (year, month, day) = if first.len() == 4 {
        (*first, *second, *third)
    } else if third.len() == 4 {
        (*third, *second, *first)
    } else {
        return None;
    };

    if !(1..=2).contains(&month.len()) || !(1..=2).contains(&day.len()) {
        return None;
    }

    NaiveDate::from_ymd_opt(
        parse_digits(year)? as i32,
        parse_digits(month)?,
        parse_digits(day)?,
    )
}

fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Number of days in `[start, end]`, counting both ends.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// `None` when the result falls outside the representable date range.
pub fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

/// Latest date on or before `date` that falls on `weekday`.
pub fn previous_weekday_on_or_before(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = date.weekday().num_days_from_sunday();
    let target = weekday.num_days_from_sunday();
    let diff = (current + 7 - target) % 7;
    shift(date, -(diff as i64))
}

pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_sunday() as usize]
}

/// `month` is 1-based; out-of-range values yield an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// `Senin, 1 Januari 2025`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        day_name(date.weekday()),
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// Compact range label; the month is written once when both ends share it.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    let start_day = day_name(start.weekday());
    let end_day = day_name(end.weekday());
    let end_month = month_name(end.month());

    if start.month() == end.month() {
        format!(
            "{}, {} - {}, {} {} {}",
            start_day,
            start.day(),
            end_day,
            end.day(),
            end_month,
            end.year()
        )
    } else {
        format!(
            "{}, {} {} - {}, {} {} {}",
            start_day,
            start.day(),
            month_name(start.month()),
            end_day,
            end.day(),
            end_month,
            end.year()
        )
    }
}
