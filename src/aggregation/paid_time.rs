//! Paid time calculation for a single shift.

use crate::models::{PayRuleset, ShiftInstance};

/// Calculates the paid minutes for a shift against a ruleset.
///
/// The paid span is `effective_end - effective_start` (actual times when
/// both are present, else scheduled), minus the shift's own break override
/// when set, else the ruleset's default unpaid break. The result is clamped
/// to zero: a malformed shift reports zero paid minutes rather than a
/// negative count or an error, so a single bad record can never abort a
/// batch aggregation.
///
/// # Example
///
/// ```
/// use roster_engine::aggregation::paid_minutes;
/// use roster_engine::models::{PayRuleset, ShiftInstance, ShiftStatus};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let ruleset = PayRuleset::new(2000, 30, vec![]).unwrap();
/// let shift = ShiftInstance {
///     id: "shift_001".to_string(),
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
/// assert_eq!(paid_minutes(&shift, &ruleset), 450); // 8h minus the 30min default break
/// ```
pub fn paid_minutes(shift: &ShiftInstance, ruleset: &PayRuleset) -> i64 {
    let span = (shift.effective_end() - shift.effective_start()).num_minutes();
    let break_minutes = i64::from(
        shift
            .break_minutes
            .unwrap_or_else(|| ruleset.unpaid_break_minutes()),
    );
    (span - break_minutes).max(0)
}
