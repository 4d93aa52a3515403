//! Shift timing arithmetic.
//!
//! Start and end timestamps are derived from a day anchor by minute
//! addition, so a duration that runs past midnight lands the end on the
//! following calendar day without any special casing. Times are wall-clock
//! naive datetimes: across a daylight-saving transition the elapsed
//! real-world duration may differ from the minute count by the DST offset,
//! which is the documented behavior for pattern-generated shifts.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Computes the scheduled start and end for a shift anchored at `date`.
///
/// # Arguments
///
/// * `date` - The calendar day the shift is anchored to
/// * `start_minute_of_day` - Start offset within the day, in minutes
/// * `duration_minutes` - Shift length in minutes
///
/// # Returns
///
/// The `(scheduled_start, scheduled_end)` pair. The end is always strictly
/// after the start and may fall on a later calendar day.
///
/// # Example
///
/// ```
/// use roster_engine::generation::scheduled_times;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let (start, end) = scheduled_times(date, 1320, 600); // 22:00 for 10h
/// assert_eq!(start.date(), date);
/// assert_eq!(end.date(), NaiveDate::from_ymd_opt(2026, 1, 16).unwrap());
/// ```
pub fn scheduled_times(
    date: NaiveDate,
    start_minute_of_day: u16,
    duration_minutes: u32,
) -> (NaiveDateTime, NaiveDateTime) {
    let midnight = date.and_hms_opt(0, 0, 0).expect("valid midnight time");
    let start = midnight + Duration::minutes(i64::from(start_minute_of_day));
    let end = start + Duration::minutes(i64::from(duration_minutes));
    (start, end)
}
