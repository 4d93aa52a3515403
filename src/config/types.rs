//! Configuration types for ruleset loading.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from YAML ruleset configuration files.

use serde::Deserialize;

use crate::models::RateRule;

/// The `ruleset.yaml` file structure: ruleset identity and base figures.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesetFile {
    /// The name of the ruleset (e.g., "default").
    pub name: String,
    /// Base hourly rate in cents.
    pub base_rate_cents: u32,
    /// Default unpaid break deduction in minutes.
    pub unpaid_break_minutes: u32,
}

/// The `rules.yaml` file structure: ordered rate-multiplier rules.
///
/// Declaration order in the file is the classification precedence order and
/// is preserved through loading.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesFile {
    /// The rate rules in declaration order.
    pub rules: Vec<RateRule>,
}
