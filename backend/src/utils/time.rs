use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Returns today's date in the configured timezone. This is the reference
/// day for "upcoming" long weekends.
pub fn today_local(tz: &Tz) -> NaiveDate {
    now_in_timezone(tz).date_naive()
}

pub fn current_year(tz: &Tz) -> i32 {
    today_local(tz).year()
}
