//! HTTP API module for the Roster Engine.
//!
//! This module provides the REST API endpoints consumed by the surrounding
//! application layer: pattern preview, shift generation, and pay period
//! aggregation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AggregateRequest, GenerateRequest, PatternRequest, PreviewRequest, RulesetRequest,
};
pub use response::ApiError;
pub use state::AppState;
