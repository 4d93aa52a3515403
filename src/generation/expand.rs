//! Pattern expansion over date windows.
//!
//! This module turns a validated [`PatternDefinition`] into concrete dated
//! occurrences: a lazy bounded [`Occurrences`] iterator for previews, and
//! [`generate`] for fully-owned, persistable shift instances. Expansion is a
//! pure function of the definition and the window — it performs no I/O,
//! consults no store, and cannot fail.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{
    DayOfWeek, PatternDefinition, PatternSchedule, ShiftInstance, ShiftPreview, ShiftStatus,
};

use super::rotation::slot_for_date;
use super::timing::scheduled_times;

/// The bound of a preview window.
///
/// A preview is always finite: either a number of months from the start
/// date or an explicit inclusive end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewHorizon {
    /// Preview the given number of months from the start date.
    Months(u32),
    /// Preview up to and including the given date.
    EndDate(NaiveDate),
}

impl PreviewHorizon {
    /// Resolves the horizon to an inclusive end date.
    fn resolve(self, start_date: NaiveDate) -> NaiveDate {
        match self {
            PreviewHorizon::Months(months) => start_date
                .checked_add_months(Months::new(months))
                .unwrap_or(NaiveDate::MAX),
            PreviewHorizon::EndDate(end) => end,
        }
    }
}

/// A lazy, restartable, finite sequence of shift occurrences.
///
/// Walks the date window day by day and yields one [`ShiftPreview`] per
/// work day. The iterator borrows the definition; calling
/// [`preview`] again with the same inputs restarts an identical sequence.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    definition: &'a PatternDefinition,
    /// Next date to examine; `None` once the window is exhausted.
    current: Option<NaiveDate>,
    last: NaiveDate,
}

impl<'a> Occurrences<'a> {
    fn new(definition: &'a PatternDefinition, from: NaiveDate, to: NaiveDate) -> Self {
        // An inverted window is an empty sequence, not an error.
        let current = if from <= to { Some(from) } else { None };
        Self {
            definition,
            current,
            last: to,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = ShiftPreview;

    fn next(&mut self) -> Option<ShiftPreview> {
        while let Some(date) = self.current {
            self.current = if date < self.last {
                date.succ_opt()
            } else {
                None
            };

            if let Some(preview) = occurrence_on(self.definition, date) {
                return Some(preview);
            }
        }
        None
    }
}

/// Produces the occurrence anchored at `date`, if the pattern works that day.
fn occurrence_on(definition: &PatternDefinition, date: NaiveDate) -> Option<ShiftPreview> {
    match definition.schedule() {
        PatternSchedule::Weekly { weekdays } => {
            if !weekdays.contains(&DayOfWeek::from(date.weekday())) {
                return None;
            }
            let (start, end) = scheduled_times(
                date,
                definition.start_minute_of_day(),
                definition.duration_minutes(),
            );
            Some(ShiftPreview {
                date,
                scheduled_start: start,
                scheduled_end: end,
                title: definition.name().to_string(),
            })
        }
        PatternSchedule::Rotating {
            rotation_days,
            cycle_start_date,
        } => {
            let slot = slot_for_date(rotation_days, *cycle_start_date, date);
            if !slot.is_work_day {
                return None;
            }
            let start_minute = slot
                .start_minute_of_day
                .unwrap_or(definition.start_minute_of_day());
            let duration = slot
                .duration_minutes
                .unwrap_or(definition.duration_minutes());
            let (start, end) = scheduled_times(date, start_minute, duration);
            Some(ShiftPreview {
                date,
                scheduled_start: start,
                scheduled_end: end,
                title: slot
                    .label
                    .clone()
                    .unwrap_or_else(|| definition.name().to_string()),
            })
        }
    }
}

/// Produces a bounded preview of a pattern for UI confirmation.
///
/// The sequence is lazy and finite, covering `[start_date, horizon]`
/// inclusive. Pure function; no side effects.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use roster_engine::generation::{preview, PreviewHorizon};
/// use roster_engine::models::{DayOfWeek, PatternDefinition, PatternSchedule};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let definition = PatternDefinition::new(
///     Uuid::new_v4(),
///     "Day shift".to_string(),
///     540,
///     480,
///     PatternSchedule::Weekly {
///         weekdays: BTreeSet::from([DayOfWeek::Monday]),
///     },
/// )
/// .unwrap();
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let previews: Vec<_> = preview(&definition, start, PreviewHorizon::Months(2)).collect();
/// assert!(!previews.is_empty());
/// ```
pub fn preview(
    definition: &PatternDefinition,
    start_date: NaiveDate,
    horizon: PreviewHorizon,
) -> Occurrences<'_> {
    Occurrences::new(definition, start_date, horizon.resolve(start_date))
}

/// Expands a pattern into fully-owned shift instances over a date window.
///
/// Uses the same expansion logic as [`preview`]. Instances are stamped with
/// the definition's pattern id and a deterministic per-occurrence id, so
/// repeated generation over the same window yields value-identical
/// instances and callers can deduplicate regenerated output against
/// previously stored instances by structural equality.
///
/// An inverted window (`from_date > to_date`) yields an empty vector.
pub fn generate(
    definition: &PatternDefinition,
    from_date: NaiveDate,
    to_date: NaiveDate,
) -> Vec<ShiftInstance> {
    Occurrences::new(definition, from_date, to_date)
        .map(|preview| ShiftInstance {
            id: format!("{}:{}", definition.id(), preview.date),
            pattern_id: Some(definition.id()),
            date: preview.date,
            scheduled_start: preview.scheduled_start,
            scheduled_end: preview.scheduled_end,
            actual_start: None,
            actual_end: None,
            title: preview.title,
            status: ShiftStatus::Scheduled,
            break_minutes: None,
            tags: vec![],
        })
        .collect()
}
