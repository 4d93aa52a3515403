//! Pay ruleset model and rate-multiplier rules.
//!
//! This module contains the [`PayRuleset`] value type threaded explicitly
//! into every aggregation call: a base hourly rate, a default unpaid break
//! deduction, and an ordered list of rate-multiplier rules.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::pattern::DayOfWeek;
use crate::models::shift::ShiftInstance;

/// The applicability predicate of a rate-multiplier rule.
///
/// # Example
///
/// ```
/// use roster_engine::models::RateMatcher;
///
/// // Matches shifts starting between 22:00 and 06:00 (wrapping midnight).
/// let night = RateMatcher::StartWindow {
///     from_minute: 1320,
///     to_minute: 360,
/// };
/// let json = serde_json::to_string(&night).unwrap();
/// assert!(json.contains("start_window"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateMatcher {
    /// Matches shifts whose effective start's minute of day falls within
    /// `[from_minute, to_minute)`. When `from_minute >= to_minute` the
    /// window wraps midnight; a window with `from_minute == to_minute`
    /// matches nothing.
    StartWindow {
        /// Start of the window as a minute of day, inclusive.
        from_minute: u16,
        /// End of the window as a minute of day, exclusive.
        to_minute: u16,
    },
    /// Matches shifts whose anchor date falls on one of these weekdays.
    Weekdays(BTreeSet<DayOfWeek>),
    /// Matches shifts explicitly tagged with this tag.
    Tag(String),
}

impl RateMatcher {
    /// Tests whether this predicate applies to a shift.
    pub fn matches(&self, shift: &ShiftInstance) -> bool {
        match self {
            RateMatcher::StartWindow {
                from_minute,
                to_minute,
            } => {
                let minute = minute_of_day(shift.effective_start());
                if from_minute < to_minute {
                    minute >= *from_minute && minute < *to_minute
                } else {
                    // Wrapping window: [from, midnight) or [midnight, to).
                    minute >= *from_minute || minute < *to_minute
                }
            }
            RateMatcher::Weekdays(days) => days.contains(&DayOfWeek::from(shift.date.weekday())),
            RateMatcher::Tag(tag) => shift.tags.iter().any(|t| t == tag),
        }
    }
}

fn minute_of_day(at: NaiveDateTime) -> u16 {
    (at.hour() * 60 + at.minute()) as u16
}

/// A named rate category mapped to a pay multiplier.
///
/// Declaration order within a [`PayRuleset`] is significant: when several
/// rules match a shift, the first one declared wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRule {
    /// The rate label (e.g. "Night", "Overtime", "Holiday").
    pub label: String,
    /// The pay multiplier applied to matching shifts (e.g. 1.5).
    pub multiplier: Decimal,
    /// The applicability predicate.
    #[serde(rename = "match")]
    pub matcher: RateMatcher,
}

/// A value-typed pay configuration.
///
/// Rulesets are validated once at construction; classification and
/// aggregation are then infallible. There is no ambient or global rate
/// state anywhere in the engine — callers pass a ruleset into every
/// aggregation call.
///
/// # Example
///
/// ```
/// use roster_engine::models::{PayRuleset, RateMatcher, RateRule};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ruleset = PayRuleset::new(
///     2000, // $20.00/h
///     30,
///     vec![RateRule {
///         label: "Overtime".to_string(),
///         multiplier: Decimal::from_str("1.5").unwrap(),
///         matcher: RateMatcher::Tag("overtime".to_string()),
///     }],
/// )
/// .unwrap();
/// assert_eq!(ruleset.base_rate_cents(), 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayRuleset {
    /// Base hourly rate in cents.
    base_rate_cents: u32,
    /// Default unpaid break deduction in minutes, applied when a shift does
    /// not specify its own break.
    unpaid_break_minutes: u32,
    /// Ordered rate-multiplier rules. First match wins.
    rules: Vec<RateRule>,
}

impl PayRuleset {
    /// Creates a validated pay ruleset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRuleset`] when a rule has an empty
    /// label or a non-positive multiplier.
    pub fn new(
        base_rate_cents: u32,
        unpaid_break_minutes: u32,
        rules: Vec<RateRule>,
    ) -> EngineResult<Self> {
        for (index, rule) in rules.iter().enumerate() {
            if rule.label.is_empty() {
                return Err(EngineError::InvalidRuleset {
                    field: format!("rules[{}].label", index),
                    message: "rate label must not be empty".to_string(),
                });
            }
            if rule.multiplier <= Decimal::ZERO {
                return Err(EngineError::InvalidRuleset {
                    field: format!("rules[{}].multiplier", index),
                    message: format!("multiplier must be positive, got {}", rule.multiplier),
                });
            }
        }

        Ok(Self {
            base_rate_cents,
            unpaid_break_minutes,
            rules,
        })
    }

    /// Returns the base hourly rate in cents.
    pub fn base_rate_cents(&self) -> u32 {
        self.base_rate_cents
    }

    /// Returns the default unpaid break deduction in minutes.
    pub fn unpaid_break_minutes(&self) -> u32 {
        self.unpaid_break_minutes
    }

    /// Returns the rate rules in declaration order.
    pub fn rules(&self) -> &[RateRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::ShiftStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_shift(date: &str, start: &str, end_date: &str, end: &str) -> ShiftInstance {
        ShiftInstance {
            id: format!("shift:{}", date),
            pattern_id: None,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            scheduled_start: make_datetime(date, start),
            scheduled_end: make_datetime(end_date, end),
            actual_start: None,
            actual_end: None,
            title: "Shift".to_string(),
            status: ShiftStatus::Scheduled,
            break_minutes: None,
            tags: vec![],
        }
    }

    /// RM-001: non-wrapping start window
    #[test]
    fn test_start_window_non_wrapping() {
        let matcher = RateMatcher::StartWindow {
            from_minute: 540, // 09:00
            to_minute: 1020,  // 17:00
        };

        let morning = make_shift("2026-01-15", "09:00:00", "2026-01-15", "17:00:00");
        let evening = make_shift("2026-01-15", "18:00:00", "2026-01-16", "02:00:00");
        assert!(matcher.matches(&morning));
        assert!(!matcher.matches(&evening));
    }

    /// RM-002: wrapping start window covers late evening and early morning
    #[test]
    fn test_start_window_wrapping() {
        let matcher = RateMatcher::StartWindow {
            from_minute: 1320, // 22:00
            to_minute: 360,    // 06:00
        };

        let late = make_shift("2026-01-15", "22:30:00", "2026-01-16", "06:30:00");
        let early = make_shift("2026-01-15", "05:00:00", "2026-01-15", "13:00:00");
        let midday = make_shift("2026-01-15", "12:00:00", "2026-01-15", "20:00:00");
        assert!(matcher.matches(&late));
        assert!(matcher.matches(&early));
        assert!(!matcher.matches(&midday));
    }

    /// RM-003: window boundaries are inclusive-from, exclusive-to
    #[test]
    fn test_start_window_boundaries() {
        let matcher = RateMatcher::StartWindow {
            from_minute: 540,
            to_minute: 1020,
        };

        let at_from = make_shift("2026-01-15", "09:00:00", "2026-01-15", "17:00:00");
        let at_to = make_shift("2026-01-15", "17:00:00", "2026-01-16", "01:00:00");
        assert!(matcher.matches(&at_from));
        assert!(!matcher.matches(&at_to));
    }

    /// RM-004: weekday matcher tests the anchor date
    #[test]
    fn test_weekday_matcher_uses_anchor_date() {
        let matcher = RateMatcher::Weekdays(BTreeSet::from([
            DayOfWeek::Saturday,
            DayOfWeek::Sunday,
        ]));

        // 2026-01-17 is a Saturday, 2026-01-15 a Thursday.
        let saturday = make_shift("2026-01-17", "09:00:00", "2026-01-17", "17:00:00");
        let thursday = make_shift("2026-01-15", "09:00:00", "2026-01-15", "17:00:00");
        assert!(matcher.matches(&saturday));
        assert!(!matcher.matches(&thursday));
    }

    /// RM-005: tag matcher requires an exact tag
    #[test]
    fn test_tag_matcher() {
        let matcher = RateMatcher::Tag("overtime".to_string());

        let mut tagged = make_shift("2026-01-15", "09:00:00", "2026-01-15", "17:00:00");
        tagged.tags = vec!["overtime".to_string()];
        let untagged = make_shift("2026-01-15", "09:00:00", "2026-01-15", "17:00:00");
        assert!(matcher.matches(&tagged));
        assert!(!matcher.matches(&untagged));
    }

    /// RM-006: start window consults actual start when present
    #[test]
    fn test_start_window_uses_effective_start() {
        let matcher = RateMatcher::StartWindow {
            from_minute: 1320,
            to_minute: 360,
        };

        let mut shift = make_shift("2026-01-15", "21:00:00", "2026-01-16", "05:00:00");
        shift.actual_start = Some(make_datetime("2026-01-15", "22:15:00"));
        shift.actual_end = Some(make_datetime("2026-01-16", "06:15:00"));
        assert!(matcher.matches(&shift));
    }

    /// RS-001: ruleset rejects non-positive multipliers
    #[test]
    fn test_ruleset_rejects_non_positive_multiplier() {
        let result = PayRuleset::new(
            2000,
            30,
            vec![RateRule {
                label: "Broken".to_string(),
                multiplier: Decimal::ZERO,
                matcher: RateMatcher::Tag("broken".to_string()),
            }],
        );

        match result {
            Err(EngineError::InvalidRuleset { field, .. }) => {
                assert_eq!(field, "rules[0].multiplier");
            }
            _ => panic!("Expected InvalidRuleset error"),
        }
    }

    /// RS-002: ruleset rejects empty labels
    #[test]
    fn test_ruleset_rejects_empty_label() {
        let result = PayRuleset::new(
            2000,
            30,
            vec![RateRule {
                label: String::new(),
                multiplier: dec("1.5"),
                matcher: RateMatcher::Tag("overtime".to_string()),
            }],
        );
        assert!(result.is_err());
    }

    /// RS-003: declaration order is preserved
    #[test]
    fn test_rule_declaration_order_preserved() {
        let ruleset = PayRuleset::new(
            2000,
            30,
            vec![
                RateRule {
                    label: "First".to_string(),
                    multiplier: dec("2.0"),
                    matcher: RateMatcher::Tag("a".to_string()),
                },
                RateRule {
                    label: "Second".to_string(),
                    multiplier: dec("1.5"),
                    matcher: RateMatcher::Tag("b".to_string()),
                },
            ],
        )
        .unwrap();

        let labels: Vec<&str> = ruleset.rules().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second"]);
    }

    #[test]
    fn test_rule_serialization_uses_match_key() {
        let rule = RateRule {
            label: "Night".to_string(),
            multiplier: dec("1.3"),
            matcher: RateMatcher::StartWindow {
                from_minute: 1320,
                to_minute: 360,
            },
        };

        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"match\""));
        assert!(json.contains("\"start_window\""));

        let deserialized: RateRule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, deserialized);
    }

    #[test]
    fn test_multiplier_deserializes_from_string() {
        let json = r#"{
            "label": "Holiday",
            "multiplier": "2.0",
            "match": { "weekdays": ["saturday", "sunday"] }
        }"#;
        let rule: RateRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.multiplier, dec("2.0"));
    }
}
