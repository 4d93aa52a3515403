//! Ruleset configuration loading for the Roster Engine.
//!
//! This module provides functionality to load pay rulesets from YAML files:
//! the base hourly rate, the default unpaid break deduction, and the
//! ordered rate-multiplier rules.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::RulesetLoader;
//!
//! let loader = RulesetLoader::load("./config/default").unwrap();
//! println!("Loaded ruleset: {}", loader.name());
//! ```

mod loader;
mod types;

pub use loader::RulesetLoader;
pub use types::{RulesFile, RulesetFile};
