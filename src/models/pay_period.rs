//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type defining the aggregation
//! window for hours and pay computations.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A contiguous date range over which hours and pay are summed.
///
/// The window is half-open on start instants: a shift starting at any time
/// on or after `start_date`'s midnight and strictly before `end_date`'s
/// midnight belongs to this period. Adjacent periods therefore share a
/// boundary date without double-counting — a shift starting exactly at
/// `end_date` midnight falls into the next period.
///
/// # Example
///
/// ```
/// use roster_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
/// };
///
/// let inside = NaiveDate::from_ymd_opt(2026, 1, 25).unwrap().and_hms_opt(23, 59, 0).unwrap();
/// let boundary = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert!(period.contains_start(inside));
/// assert!(!period.contains_start(boundary));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the period.
    pub start_date: NaiveDate,
    /// The day the next period begins. Start instants at this day's midnight
    /// or later are excluded.
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks whether a shift start instant falls within this period.
    ///
    /// The check is inclusive of `start_date` midnight and exclusive of
    /// `end_date` midnight.
    pub fn contains_start(&self, start: NaiveDateTime) -> bool {
        let period_start = self.start_date.and_hms_opt(0, 0, 0).expect("valid midnight");
        let period_end = self.end_date.and_hms_opt(0, 0, 0).expect("valid midnight");
        start >= period_start && start < period_end
    }

    /// Returns the period immediately following this one, with the same
    /// length in days.
    pub fn next(&self) -> PayPeriod {
        let length = self.end_date - self.start_date;
        PayPeriod {
            start_date: self.end_date,
            end_date: self.end_date + length,
        }
    }
}
