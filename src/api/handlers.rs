//! HTTP request handlers for the Roster Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::aggregate;
use crate::error::EngineError;
use crate::generation::{generate, preview};
use crate::models::{PatternDefinition, PayRuleset, ShiftInstance, ShiftPreview};

use super::request::{AggregateRequest, GenerateRequest, PreviewRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/pattern/preview", post(preview_handler))
        .route("/pattern/generate", post(generate_handler))
        .route("/aggregate", post(aggregate_handler))
        .with_state(state)
}

/// Unpacks a JSON payload, mapping rejections to structured error responses.
fn unpack<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Maps an engine error to its HTTP response.
fn error_response(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /pattern/preview endpoint.
///
/// Expands a pattern into a bounded preview for UI confirmation.
async fn preview_handler(payload: Result<Json<PreviewRequest>, JsonRejection>) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing preview request");

    let request = match unpack(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_date = request.start_date;
    let horizon = request.horizon();
    let definition = match PatternDefinition::try_from(request.pattern) {
        Ok(definition) => definition,
        Err(error) => return error_response(correlation_id, error),
    };

    let previews: Vec<ShiftPreview> = preview(&definition, start_date, horizon).collect();
    info!(
        correlation_id = %correlation_id,
        pattern_id = %definition.id(),
        preview_count = previews.len(),
        "Preview generated"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(previews),
    )
        .into_response()
}

/// Handler for POST /pattern/generate endpoint.
///
/// Expands a pattern into fully-owned shift instances over a date window.
async fn generate_handler(payload: Result<Json<GenerateRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing generate request");

    let request = match unpack(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let definition = match PatternDefinition::try_from(request.pattern) {
        Ok(definition) => definition,
        Err(error) => return error_response(correlation_id, error),
    };

    let instances: Vec<ShiftInstance> =
        generate(&definition, request.from_date, request.to_date);
    info!(
        correlation_id = %correlation_id,
        pattern_id = %definition.id(),
        instance_count = instances.len(),
        "Shift instances generated"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(instances),
    )
        .into_response()
}

/// Handler for POST /aggregate endpoint.
///
/// Aggregates shift instances into a pay period summary, using the inline
/// ruleset when supplied, else the server's default ruleset.
async fn aggregate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AggregateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing aggregate request");

    let request = match unpack(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let ruleset = match request.ruleset {
        Some(inline) => match PayRuleset::try_from(inline) {
            Ok(ruleset) => ruleset,
            Err(error) => return error_response(correlation_id, error),
        },
        None => state.ruleset().ruleset().clone(),
    };

    let summary = aggregate(&request.shifts, &request.period, &ruleset);
    info!(
        correlation_id = %correlation_id,
        shifts_count = request.shifts.len(),
        paid_minutes = summary.paid_minutes,
        estimated_pay_cents = summary.estimated_pay_cents,
        warning_count = summary.warnings.len(),
        "Aggregation completed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}
