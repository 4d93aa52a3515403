//! Pay period aggregation.
//!
//! Computes paid/premium minute totals and an estimated pay figure for a
//! set of shift instances against a ruleset, scoped to a period window.
//! Aggregation is a full re-derivation on every call: there is no
//! incremental update path, which keeps recomputation trivially correct for
//! realistic shift-set sizes (hundreds, not millions).

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AggregationWarning, PayPeriod, PayRuleset, PeriodSummary, ShiftInstance};

use super::classify::classify;
use super::paid_time::paid_minutes;

/// Warning code for shifts contributing zero paid time.
pub const WARNING_NON_POSITIVE_PAID_TIME: &str = "NON_POSITIVE_PAID_TIME";

/// Aggregates shift instances into a pay period summary.
///
/// Shifts are included when their effective start instant falls within
/// `[period.start_date, period.end_date)` — the half-open bound guarantees
/// a shift starting exactly at `end_date` midnight lands in the following
/// period, never in both. Paid minutes are summed as exact integers grouped
/// by resolved rate label; the estimated pay is
/// `Σ(minutes × base_rate × multiplier) / 60` with the division and
/// round-half-to-even applied once at the final summation step, so the
/// result does not depend on the order shifts are supplied in.
///
/// Degenerate shifts (non-positive paid span) contribute zero minutes and
/// surface an [`AggregationWarning`]; they never abort the batch.
///
/// # Example
///
/// ```
/// use roster_engine::aggregation::aggregate;
/// use roster_engine::models::{PayPeriod, PayRuleset};
/// use chrono::NaiveDate;
///
/// let ruleset = PayRuleset::new(2000, 30, vec![]).unwrap();
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
/// };
///
/// let summary = aggregate(&[], &period, &ruleset);
/// assert_eq!(summary.paid_minutes, 0);
/// assert_eq!(summary.estimated_pay_cents, 0);
/// ```
pub fn aggregate(
    shifts: &[ShiftInstance],
    period: &PayPeriod,
    ruleset: &PayRuleset,
) -> PeriodSummary {
    let mut paid_minutes_total: i64 = 0;
    let mut premium_minutes_by_label: BTreeMap<String, i64> = BTreeMap::new();
    let mut warnings: Vec<AggregationWarning> = Vec::new();

    // Exact running sum of minutes x base-rate-cents x multiplier. Every
    // term is exact in Decimal, so the sum is order-independent; the single
    // division by 60 and the rounding happen after the loop.
    let mut pay_minute_cents = Decimal::ZERO;

    for shift in shifts {
        if !period.contains_start(shift.effective_start()) {
            continue;
        }

        let minutes = paid_minutes(shift, ruleset);
        if minutes == 0 {
            warnings.push(AggregationWarning {
                shift_id: shift.id.clone(),
                code: WARNING_NON_POSITIVE_PAID_TIME.to_string(),
                message: "shift contributes no paid time after break deduction".to_string(),
            });
            continue;
        }

        paid_minutes_total += minutes;

        let class = classify(shift, ruleset);
        if let Some(label) = class.label {
            *premium_minutes_by_label.entry(label.to_string()).or_insert(0) += minutes;
        }

        pay_minute_cents +=
            Decimal::from(minutes) * Decimal::from(ruleset.base_rate_cents()) * class.multiplier;
    }

    let estimated_pay_cents = (pay_minute_cents / Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .expect("estimated pay fits in i64");

    PeriodSummary {
        period: *period,
        paid_minutes: paid_minutes_total,
        premium_minutes_by_label,
        estimated_pay_cents,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, RateMatcher, RateRule, ShiftStatus};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_shift(id: &str, date: &str, start: &str, minutes: i64) -> ShiftInstance {
        let scheduled_start = make_datetime(date, start);
        ShiftInstance {
            id: id.to_string(),
            pattern_id: None,
            date: make_date(date),
            scheduled_start,
            scheduled_end: scheduled_start + chrono::Duration::minutes(minutes),
            actual_start: None,
            actual_end: None,
            title: "Shift".to_string(),
            status: ShiftStatus::Scheduled,
            break_minutes: Some(0),
            tags: vec![],
        }
    }

    fn january_period() -> PayPeriod {
        PayPeriod {
            start_date: make_date("2026-01-01"),
            end_date: make_date("2026-01-15"),
        }
    }

    fn flat_ruleset(base_rate_cents: u32) -> PayRuleset {
        PayRuleset::new(base_rate_cents, 0, vec![]).unwrap()
    }

    fn overtime_ruleset(base_rate_cents: u32) -> PayRuleset {
        PayRuleset::new(
            base_rate_cents,
            0,
            vec![RateRule {
                label: "Overtime".to_string(),
                multiplier: dec("1.5"),
                matcher: RateMatcher::Tag("overtime".to_string()),
            }],
        )
        .unwrap()
    }

    /// AG-001: empty shift set yields a zero summary
    #[test]
    fn test_empty_shift_set() {
        let summary = aggregate(&[], &january_period(), &flat_ruleset(2000));
        assert_eq!(summary.paid_minutes, 0);
        assert_eq!(summary.estimated_pay_cents, 0);
        assert!(summary.premium_minutes_by_label.is_empty());
        assert!(summary.warnings.is_empty());
    }

    /// AG-002: 8 hours at multiplier 1.5 pays exactly 24000 cents
    #[test]
    fn test_premium_shift_exact_pay() {
        let mut shift = make_shift("s1", "2026-01-05", "09:00:00", 480);
        shift.tags = vec!["overtime".to_string()];

        let summary = aggregate(&[shift], &january_period(), &overtime_ruleset(2000));
        assert_eq!(summary.paid_minutes, 480);
        assert_eq!(summary.premium_minutes_by_label.get("Overtime"), Some(&480));
        assert_eq!(summary.estimated_pay_cents, 24_000);
    }

    /// AG-003: a lone third-of-an-hour shift rounds to 667 cents
    #[test]
    fn test_third_of_hour_rounds_up() {
        let shift = make_shift("s1", "2026-01-05", "09:00:00", 20);
        let summary = aggregate(&[shift], &january_period(), &flat_ruleset(2000));
        assert_eq!(summary.paid_minutes, 20);
        assert_eq!(summary.estimated_pay_cents, 667);
    }

    /// AG-004: three third-of-an-hour shifts sum without rounding drift,
    /// regardless of order
    #[test]
    fn test_rounding_stability_across_order() {
        let shifts = vec![
            make_shift("a", "2026-01-05", "09:00:00", 20),
            make_shift("b", "2026-01-06", "09:00:00", 20),
            make_shift("c", "2026-01-07", "09:00:00", 20),
        ];
        let mut reversed = shifts.clone();
        reversed.reverse();

        let forward = aggregate(&shifts, &january_period(), &flat_ruleset(2000));
        let backward = aggregate(&reversed, &january_period(), &flat_ruleset(2000));

        // 60 minutes at $20.00/h is exactly $20.00.
        assert_eq!(forward.estimated_pay_cents, 2000);
        assert_eq!(forward.estimated_pay_cents, backward.estimated_pay_cents);
        assert_eq!(forward.paid_minutes, backward.paid_minutes);
    }

    /// AG-005: final rounding is half-to-even
    #[test]
    fn test_bankers_rounding_at_final_step() {
        // 1 minute at 30 cents/h is exactly 0.5 cents: rounds to 0 (even).
        let shift = make_shift("s1", "2026-01-05", "09:00:00", 1);
        let summary = aggregate(&[shift], &january_period(), &flat_ruleset(30));
        assert_eq!(summary.estimated_pay_cents, 0);

        // 1 minute at 90 cents/h is exactly 1.5 cents: rounds to 2 (even).
        let shift = make_shift("s1", "2026-01-05", "09:00:00", 1);
        let summary = aggregate(&[shift], &january_period(), &flat_ruleset(90));
        assert_eq!(summary.estimated_pay_cents, 2);
    }

    /// AG-006: a shift starting exactly at the period end is excluded there
    /// and included in the following period
    #[test]
    fn test_half_open_boundary() {
        let period = january_period();
        let following = period.next();
        let boundary_shift = make_shift("s1", "2026-01-15", "00:00:00", 480);

        let first = aggregate(
            std::slice::from_ref(&boundary_shift),
            &period,
            &flat_ruleset(2000),
        );
        let second = aggregate(&[boundary_shift], &following, &flat_ruleset(2000));

        assert_eq!(first.paid_minutes, 0);
        assert_eq!(second.paid_minutes, 480);
    }

    /// AG-007: degenerate shifts warn and never abort the batch
    #[test]
    fn test_degenerate_shift_warns_without_aborting() {
        let good = make_shift("good", "2026-01-05", "09:00:00", 480);
        let mut bad = make_shift("bad", "2026-01-06", "17:00:00", 0);
        bad.scheduled_end = make_datetime("2026-01-06", "09:00:00");

        let summary = aggregate(&[good, bad], &january_period(), &flat_ruleset(2000));
        assert_eq!(summary.paid_minutes, 480);
        assert_eq!(summary.warnings.len(), 1);
        assert_eq!(summary.warnings[0].shift_id, "bad");
        assert_eq!(summary.warnings[0].code, WARNING_NON_POSITIVE_PAID_TIME);
    }

    /// AG-008: the default break applies to shifts without an override
    #[test]
    fn test_default_break_applies() {
        let mut shift = make_shift("s1", "2026-01-05", "09:00:00", 480);
        shift.break_minutes = None;

        let ruleset = PayRuleset::new(2000, 30, vec![]).unwrap();
        let summary = aggregate(&[shift], &january_period(), &ruleset);
        assert_eq!(summary.paid_minutes, 450);
        assert_eq!(summary.estimated_pay_cents, 15_000);
    }

    /// AG-009: minutes group by resolved label and unlabeled minutes count
    /// only in the overall total
    #[test]
    fn test_label_grouping() {
        let mut premium = make_shift("ot", "2026-01-05", "09:00:00", 120);
        premium.tags = vec!["overtime".to_string()];
        let plain = make_shift("plain", "2026-01-06", "09:00:00", 240);

        let summary = aggregate(
            &[premium, plain],
            &january_period(),
            &overtime_ruleset(2000),
        );
        assert_eq!(summary.paid_minutes, 360);
        assert_eq!(summary.premium_minutes_by_label.len(), 1);
        assert_eq!(summary.premium_minutes_by_label.get("Overtime"), Some(&120));
        // 2h at 1.5x plus 4h at 1.0x, all at $20.00/h.
        assert_eq!(summary.estimated_pay_cents, 6000 + 8000);
    }

    /// AG-010: shifts outside the window are ignored entirely
    #[test]
    fn test_out_of_window_shifts_ignored() {
        let before = make_shift("before", "2025-12-31", "09:00:00", 480);
        let inside = make_shift("inside", "2026-01-05", "09:00:00", 480);
        let after = make_shift("after", "2026-02-01", "09:00:00", 480);

        let summary = aggregate(
            &[before, inside, after],
            &january_period(),
            &flat_ruleset(2000),
        );
        assert_eq!(summary.paid_minutes, 480);
        assert!(summary.warnings.is_empty());
    }

    /// AG-011: recomputation over the same inputs is identical
    #[test]
    fn test_recomputation_is_deterministic() {
        let mut night = make_shift("night", "2026-01-05", "22:00:00", 600);
        night.tags = vec!["overtime".to_string()];
        let shifts = vec![
            night,
            make_shift("day", "2026-01-06", "09:00:00", 480),
            make_shift("short", "2026-01-07", "09:00:00", 20),
        ];
        let ruleset = overtime_ruleset(2000);

        let first = aggregate(&shifts, &january_period(), &ruleset);
        let second = aggregate(&shifts, &january_period(), &ruleset);
        assert_eq!(first, second);
    }

    /// AG-012: period filtering uses actual start when present
    #[test]
    fn test_filter_uses_effective_start() {
        // Scheduled inside the period but actually started after it ended.
        let mut shift = make_shift("s1", "2026-01-14", "23:00:00", 480);
        shift.actual_start = Some(make_datetime("2026-01-15", "00:30:00"));
        shift.actual_end = Some(make_datetime("2026-01-15", "08:30:00"));

        let summary = aggregate(&[shift], &january_period(), &flat_ruleset(2000));
        assert_eq!(summary.paid_minutes, 0);
        assert!(summary.warnings.is_empty());
    }

    /// AG-013: weekday rate rules resolve against the anchor date
    #[test]
    fn test_weekday_rule_aggregation() {
        let ruleset = PayRuleset::new(
            2000,
            0,
            vec![RateRule {
                label: "Weekend".to_string(),
                multiplier: dec("2.0"),
                matcher: RateMatcher::Weekdays(
                    [DayOfWeek::Saturday, DayOfWeek::Sunday].into_iter().collect(),
                ),
            }],
        )
        .unwrap();

        // 2026-01-10 is a Saturday.
        let weekend = make_shift("sat", "2026-01-10", "09:00:00", 480);
        let weekday = make_shift("mon", "2026-01-05", "09:00:00", 480);

        let summary = aggregate(&[weekend, weekday], &january_period(), &ruleset);
        assert_eq!(summary.premium_minutes_by_label.get("Weekend"), Some(&480));
        // 8h at 2.0x plus 8h at 1.0x, all at $20.00/h.
        assert_eq!(summary.estimated_pay_cents, 32_000 + 16_000);
    }
}
