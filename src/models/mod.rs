//! Core data models for the Roster Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pattern;
mod pay_period;
mod ruleset;
mod shift;
mod summary;

pub use pattern::{
    DayOfWeek, MINUTES_PER_DAY, PatternDefinition, PatternSchedule, RotationDay,
};
pub use pay_period::PayPeriod;
pub use ruleset::{PayRuleset, RateMatcher, RateRule};
pub use shift::{ShiftInstance, ShiftPreview, ShiftStatus};
pub use summary::{AggregationWarning, PeriodSummary};
