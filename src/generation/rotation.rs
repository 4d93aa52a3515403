//! Rotating cycle offset arithmetic.
//!
//! A rotating pattern maps every calendar date to a slot in its cycle by
//! counting days from the cycle anchor. The offset uses a mathematical
//! modulo so dates before the anchor wrap to the correct slot instead of
//! producing a negative remainder.

use chrono::NaiveDate;

use crate::models::RotationDay;

/// Computes the cycle offset for a date relative to a cycle anchor.
///
/// The offset is always in `[0, cycle_length)`, including for dates before
/// the anchor: one full cycle before the anchor resolves to offset 0 again.
/// The anchor is the pattern's `cycle_start_date`, never the expansion
/// window's start — clamping a window does not shift the cycle.
///
/// # Arguments
///
/// * `cycle_start_date` - The date at which slot 0 applies
/// * `date` - The date to resolve
/// * `cycle_length` - The number of slots in the cycle (>= 2 for any
///   validated pattern)
///
/// # Example
///
/// ```
/// use roster_engine::generation::rotation_offset;
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let before = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap(); // anchor - 8
/// assert_eq!(rotation_offset(anchor, before, 8), 0);
/// ```
pub fn rotation_offset(cycle_start_date: NaiveDate, date: NaiveDate, cycle_length: usize) -> usize {
    let days_from_anchor = (date - cycle_start_date).num_days();
    days_from_anchor.rem_euclid(cycle_length as i64) as usize
}

/// Resolves the rotation slot that applies to a date.
pub fn slot_for_date<'a>(
    rotation_days: &'a [RotationDay],
    cycle_start_date: NaiveDate,
    date: NaiveDate,
) -> &'a RotationDay {
    let offset = rotation_offset(cycle_start_date, date, rotation_days.len());
    &rotation_days[offset]
}
