//! Aggregation result models.
//!
//! This module contains the [`PeriodSummary`] type produced by the hours and
//! pay aggregator, plus the out-of-band warnings surfaced for degenerate
//! shift records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::pay_period::PayPeriod;

/// A warning generated during aggregation.
///
/// Warnings indicate shifts that contributed zero paid time (for example a
/// non-positive span after break deduction). They never abort the period
/// computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationWarning {
    /// The ID of the shift that triggered the warning.
    pub shift_id: String,
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The computed totals for a pay period.
///
/// A summary is derived data: it is always recomputable from the constituent
/// shift set and ruleset, and recomputation is deterministic. It is never a
/// source of truth.
///
/// # Example
///
/// ```
/// use roster_engine::models::{PayPeriod, PeriodSummary};
/// use chrono::NaiveDate;
/// use std::collections::BTreeMap;
///
/// let summary = PeriodSummary {
///     period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     },
///     paid_minutes: 0,
///     premium_minutes_by_label: BTreeMap::new(),
///     estimated_pay_cents: 0,
///     warnings: vec![],
/// };
/// assert_eq!(summary.paid_minutes, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The aggregation window.
    pub period: PayPeriod,
    /// Total paid minutes across all shifts in the period.
    pub paid_minutes: i64,
    /// Paid minutes grouped by resolved rate label. Shifts classified at the
    /// default multiplier carry no label and appear only in `paid_minutes`.
    pub premium_minutes_by_label: BTreeMap<String, i64>,
    /// Estimated pay in cents, rounded half-to-even at the final summation.
    pub estimated_pay_cents: i64,
    /// Out-of-band diagnostics for shifts that contributed zero paid time.
    pub warnings: Vec<AggregationWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_summary() -> PeriodSummary {
        let mut premium = BTreeMap::new();
        premium.insert("Night".to_string(), 480);
        PeriodSummary {
            period: PayPeriod {
                start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
            },
            paid_minutes: 2400,
            premium_minutes_by_label: premium,
            estimated_pay_cents: 92_000,
            warnings: vec![AggregationWarning {
                shift_id: "shift_009".to_string(),
                code: "NON_POSITIVE_PAID_TIME".to_string(),
                message: "paid time is zero after break deduction".to_string(),
            }],
        }
    }

    #[test]
    fn test_serialization_round_trip() {
        let summary = make_summary();
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: PeriodSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }

    #[test]
    fn test_label_map_serializes_by_label() {
        let summary = make_summary();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"premium_minutes_by_label\":{\"Night\":480}"));
    }

    #[test]
    fn test_label_order_is_deterministic() {
        let mut premium = BTreeMap::new();
        premium.insert("Overtime".to_string(), 60);
        premium.insert("Night".to_string(), 120);

        let labels: Vec<&String> = premium.keys().collect();
        assert_eq!(labels, vec!["Night", "Overtime"]);
    }
}
