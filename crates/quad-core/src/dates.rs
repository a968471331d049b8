//! Day-level date helpers shared by the grid projector and the filters.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday};

/// Canonical `YYYY-MM-DD` key for a calendar day, zero-padded.
///
/// This is the join key between grid cells and event buckets, and sorting
/// it lexicographically sorts chronologically.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// First instant of a day (00:00:00.000).
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last instant of a day (23:59:59.999).
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

/// Every day from `start` through `end`, inclusive on both sides.
///
/// A single-day range yields one element; an inverted range yields none.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| day <= &end).collect()
}

/// The next occurrence of `target` on or after `from`.
///
/// If `from` already falls on `target`, `from` itself is returned. This is
/// what makes the weekend filter keep matching through Saturday.
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let mut day = from;
    while day.weekday() != target {
        day = day.succ_opt().unwrap_or(day);
    }
    day
}

/// The calendar day an instant falls on in the viewer's timezone.
pub fn local_date<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// The wall-clock date and time of an instant in the viewer's timezone.
pub fn local_datetime<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDateTime {
    instant.with_timezone(tz).naive_local()
}
