//! Request types for the Roster Engine API.
//!
//! This module defines the JSON request structures for the pattern and
//! aggregation endpoints. Requests deserialize leniently and convert to
//! domain types through the validating constructors, so every semantic
//! check lives in one place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::generation::PreviewHorizon;
use crate::models::{PatternDefinition, PatternSchedule, PayPeriod, PayRuleset, RateRule, ShiftInstance};

/// A pattern definition in a request body.
///
/// Converts to [`PatternDefinition`] through the validating constructor.
/// Callers that need stable instance ids across regenerations should supply
/// `id`; when omitted a fresh id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRequest {
    /// Opaque pattern identifier. Assigned when omitted.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display name, used as the default shift title.
    pub name: String,
    /// Shift start offset within a day, in minutes.
    pub start_minute_of_day: u16,
    /// Shift length in minutes.
    pub duration_minutes: u32,
    /// The recurrence variant (weekly or rotating).
    pub schedule: PatternSchedule,
}

impl TryFrom<PatternRequest> for PatternDefinition {
    type Error = EngineError;

    fn try_from(request: PatternRequest) -> Result<Self, Self::Error> {
        PatternDefinition::new(
            request.id.unwrap_or_else(Uuid::new_v4),
            request.name,
            request.start_minute_of_day,
            request.duration_minutes,
            request.schedule,
        )
    }
}

/// Request body for the `POST /pattern/preview` endpoint.
///
/// The preview window starts at `start_date` and is bounded by `months`
/// when present, else by `end_date`, else by a default two-month horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// The pattern to preview.
    pub pattern: PatternRequest,
    /// The first day of the preview window.
    pub start_date: NaiveDate,
    /// Preview this many months from `start_date`.
    #[serde(default)]
    pub months: Option<u32>,
    /// Preview up to and including this date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl PreviewRequest {
    /// Default preview horizon when neither `months` nor `end_date` is set.
    pub const DEFAULT_MONTHS: u32 = 2;

    /// Resolves the requested horizon.
    pub fn horizon(&self) -> PreviewHorizon {
        match (self.months, self.end_date) {
            (Some(months), _) => PreviewHorizon::Months(months),
            (None, Some(end_date)) => PreviewHorizon::EndDate(end_date),
            (None, None) => PreviewHorizon::Months(Self::DEFAULT_MONTHS),
        }
    }
}

/// Request body for the `POST /pattern/generate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The pattern to expand.
    pub pattern: PatternRequest,
    /// The first day of the generation window, inclusive.
    pub from_date: NaiveDate,
    /// The last day of the generation window, inclusive.
    pub to_date: NaiveDate,
}

/// A pay ruleset in a request body.
///
/// Converts to [`PayRuleset`] through the validating constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesetRequest {
    /// Base hourly rate in cents.
    pub base_rate_cents: u32,
    /// Default unpaid break deduction in minutes.
    #[serde(default)]
    pub unpaid_break_minutes: u32,
    /// Ordered rate-multiplier rules.
    #[serde(default)]
    pub rules: Vec<RateRule>,
}

impl TryFrom<RulesetRequest> for PayRuleset {
    type Error = EngineError;

    fn try_from(request: RulesetRequest) -> Result<Self, Self::Error> {
        PayRuleset::new(
            request.base_rate_cents,
            request.unpaid_break_minutes,
            request.rules,
        )
    }
}

/// Request body for the `POST /aggregate` endpoint.
///
/// Shift instances are consumed exactly as provided; resolving actual times
/// from user edits or calendar events is the storage collaborator's job.
/// When `ruleset` is omitted the server's default ruleset applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// The shift instances to aggregate.
    pub shifts: Vec<ShiftInstance>,
    /// The aggregation window.
    pub period: PayPeriod,
    /// Optional inline ruleset overriding the server default.
    #[serde(default)]
    pub ruleset: Option<RulesetRequest>,
}
