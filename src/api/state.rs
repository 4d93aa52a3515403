//! Application state for the Roster Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RulesetLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers, such as
/// the default pay ruleset loaded at startup. The state is immutable: the
/// core never reads it ambiently, handlers thread the ruleset into each
/// aggregation call explicitly.
#[derive(Clone)]
pub struct AppState {
    /// The loaded default ruleset.
    ruleset: Arc<RulesetLoader>,
}

impl AppState {
    /// Creates a new application state with the given ruleset loader.
    pub fn new(ruleset: RulesetLoader) -> Self {
        Self {
            ruleset: Arc::new(ruleset),
        }
    }

    /// Returns a reference to the default ruleset loader.
    pub fn ruleset(&self) -> &RulesetLoader {
        &self.ruleset
    }
}
