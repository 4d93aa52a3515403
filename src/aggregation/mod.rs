//! Hours and pay aggregation logic for the Roster Engine.
//!
//! This module contains the aggregator: per-shift paid time calculation,
//! rate classification against an ordered ruleset, and pay period
//! aggregation with banker's rounding at the final summation step.

mod aggregate;
mod classify;
mod paid_time;

pub use aggregate::{WARNING_NON_POSITIVE_PAID_TIME, aggregate};
pub use classify::{RateClass, classify};
pub use paid_time::paid_minutes;
