//! Rate classification for shifts.
//!
//! Resolves which of a ruleset's rate-multiplier rules applies to a shift.
//! Declaration order is the precedence order: when several rules match, the
//! first one declared wins.

use rust_decimal::Decimal;

use crate::models::{PayRuleset, ShiftInstance};

/// The resolved rate category for a shift.
///
/// Shifts matching no rule classify at the default multiplier of 1.0 with
/// no label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateClass<'a> {
    /// The matched rule's label, or `None` for the default rate.
    pub label: Option<&'a str>,
    /// The pay multiplier for this shift.
    pub multiplier: Decimal,
}

/// Resolves the rate class for a shift against a ruleset.
///
/// # Example
///
/// ```
/// use roster_engine::aggregation::classify;
/// use roster_engine::models::{PayRuleset, RateMatcher, RateRule, ShiftInstance, ShiftStatus};
/// use rust_decimal::Decimal;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use std::str::FromStr;
///
/// let ruleset = PayRuleset::new(
///     2000,
///     0,
///     vec![RateRule {
///         label: "Overtime".to_string(),
///         multiplier: Decimal::from_str("1.5").unwrap(),
///         matcher: RateMatcher::Tag("overtime".to_string()),
///     }],
/// )
/// .unwrap();
///
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
///     tags: vec!["overtime".to_string()],
/// };
///
/// let class = classify(&shift, &ruleset);
/// assert_eq!(class.label, Some("Overtime"));
/// ```
pub fn classify<'a>(shift: &ShiftInstance, ruleset: &'a PayRuleset) -> RateClass<'a> {
    ruleset
        .rules()
        .iter()
        .find(|rule| rule.matcher.matches(shift))
        .map(|rule| RateClass {
            label: Some(rule.label.as_str()),
            multiplier: rule.multiplier,
        })
        .unwrap_or(RateClass {
            label: None,
            multiplier: Decimal::ONE,
        })
}
