//! Ruleset configuration loading functionality.
//!
//! This module provides the [`RulesetLoader`] type for loading a pay
//! ruleset from YAML files. The loader is the only part of the crate that
//! touches the filesystem; the loaded [`PayRuleset`] is a plain value the
//! caller threads into aggregation calls explicitly.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PayRuleset;

use super::types::{RulesFile, RulesetFile};

/// Loads and provides access to a pay ruleset configuration.
///
/// # Directory Structure
///
/// A ruleset directory has the following structure:
/// ```text
/// config/default/
/// ├── ruleset.yaml  # name, base rate, default unpaid break
/// └── rules.yaml    # ordered rate-multiplier rules
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::RulesetLoader;
///
/// let loader = RulesetLoader::load("./config/default").unwrap();
/// println!("Loaded ruleset: {}", loader.name());
/// println!("Base rate: {} cents/h", loader.ruleset().base_rate_cents());
/// ```
#[derive(Debug, Clone)]
pub struct RulesetLoader {
    name: String,
    ruleset: PayRuleset,
}

impl RulesetLoader {
    /// Loads a ruleset from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ruleset directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `RulesetLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - The rules fail semantic validation (e.g. a non-positive multiplier)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_engine::config::RulesetLoader;
    ///
    /// let loader = RulesetLoader::load("./config/default")?;
    /// # Ok::<(), roster_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let ruleset_path = path.join("ruleset.yaml");
        let ruleset_file = Self::load_yaml::<RulesetFile>(&ruleset_path)?;

        let rules_path = path.join("rules.yaml");
        let rules_file = Self::load_yaml::<RulesFile>(&rules_path)?;

        let ruleset = PayRuleset::new(
            ruleset_file.base_rate_cents,
            ruleset_file.unpaid_break_minutes,
            rules_file.rules,
        )?;

        Ok(Self {
            name: ruleset_file.name,
            ruleset,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the name of the loaded ruleset.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loaded ruleset.
    pub fn ruleset(&self) -> &PayRuleset {
        &self.ruleset
    }
}
