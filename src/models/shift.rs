//! Shift instance and preview models.
//!
//! This module defines the [`ShiftInstance`] and [`ShiftPreview`] structs
//! representing concrete dated occurrences of a shift, whether generated
//! from a pattern or entered manually.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a shift instance.
///
/// The pattern engine always emits [`ShiftStatus::Scheduled`]; the remaining
/// states are advanced by the surrounding application as the worker clocks
/// in and out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// The shift is planned but has not started.
    Scheduled,
    /// The shift is currently being worked.
    InProgress,
    /// The shift has been worked to completion.
    Completed,
    /// The shift was cancelled and will not be worked.
    Cancelled,
}

impl Default for ShiftStatus {
    fn default() -> Self {
        ShiftStatus::Scheduled
    }
}

/// A lightweight dated occurrence produced for UI confirmation before a
/// pattern is committed.
///
/// Previews carry only what a confirmation screen needs; committing the
/// pattern produces full [`ShiftInstance`] values via the same expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPreview {
    /// The calendar day the shift is anchored to (its start's local day).
    pub date: NaiveDate,
    /// The scheduled start of the shift.
    pub scheduled_start: NaiveDateTime,
    /// The scheduled end of the shift. Always after `scheduled_start`.
    pub scheduled_end: NaiveDateTime,
    /// Display title derived from the pattern or rotation day.
    pub title: String,
}

/// A concrete dated occurrence of a shift.
///
/// Instances are snapshots, not live views: regenerating a pattern produces
/// new value-identical instances rather than mutating old ones, so callers
/// can deduplicate by structural equality over (date, start, end, title).
///
/// # Example
///
/// ```
/// use roster_engine::models::{ShiftInstance, ShiftStatus};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let shift = ShiftInstance {
///     id: "manual:2026-01-15".to_string(),
///     pattern_id: None,
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     scheduled_start: NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     scheduled_end: NaiveDateTime::parse_from_str("2026-01-15 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     actual_start: None,
///     actual_end: None,
///     title: "Day shift".to_string(),
///     status: ShiftStatus::Scheduled,
///     break_minutes: None,
///     tags: vec![],
/// };
/// assert_eq!(shift.effective_start(), shift.scheduled_start);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInstance {
    /// Identifier for the instance. Generated instances derive this from the
    /// pattern id and date so regeneration is value-identical.
    pub id: String,
    /// Opaque identifier of the pattern that generated this instance, or
    /// `None` for manual entries.
    #[serde(default)]
    pub pattern_id: Option<Uuid>,
    /// The calendar day the shift is anchored to (its scheduled start's
    /// local day), even when the shift ends on a later day.
    pub date: NaiveDate,
    /// The scheduled start of the shift.
    pub scheduled_start: NaiveDateTime,
    /// The scheduled end of the shift. Always after `scheduled_start` for
    /// generated instances.
    pub scheduled_end: NaiveDateTime,
    /// Actual start, resolved by external collaborators from user edits.
    #[serde(default)]
    pub actual_start: Option<NaiveDateTime>,
    /// Actual end, resolved by external collaborators from user edits.
    #[serde(default)]
    pub actual_end: Option<NaiveDateTime>,
    /// Display title derived from the pattern or rotation day.
    pub title: String,
    /// Lifecycle status. Defaults to `scheduled`.
    #[serde(default)]
    pub status: ShiftStatus,
    /// Per-shift unpaid break override in minutes. When `None`, the
    /// ruleset's default break deduction applies.
    #[serde(default)]
    pub break_minutes: Option<u32>,
    /// Free-form tags consulted by tag-based rate rules (e.g. "overtime").
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ShiftInstance {
    /// Returns the start used for period filtering and rate classification:
    /// the actual start when both actual times are present, else the
    /// scheduled start.
    pub fn effective_start(&self) -> NaiveDateTime {
        match (self.actual_start, self.actual_end) {
            (Some(start), Some(_)) => start,
            _ => self.scheduled_start,
        }
    }

    /// Returns the end paired with [`ShiftInstance::effective_start`].
    pub fn effective_end(&self) -> NaiveDateTime {
        match (self.actual_start, self.actual_end) {
            (Some(_), Some(end)) => end,
            _ => self.scheduled_end,
        }
    }

    /// Returns the day of the week of the anchor date.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// Structural equality over (date, start, end, title), the key callers
    /// use to deduplicate regenerated instances against stored ones.
    pub fn is_same_occurrence(&self, other: &ShiftInstance) -> bool {
        self.date == other.date
            && self.scheduled_start == other.scheduled_start
            && self.scheduled_end == other.scheduled_end
            && self.title == other.title
    }
}
