pub mod feedback;
pub mod ride_requests;
pub mod rides;
pub mod users;

use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use sqlx::MySqlPool;
use crate::services::PushService;

#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
    pub push: PushService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/login", get(users::login))
        .route("/api/users/{id}", get(users::get_user).put(users::update_profile))
        .route("/api/users/{id}/upi", put(users::update_upi))
        .route("/api/rides", get(rides::list_rides).post(rides::create_ride))
        .route(
            "/api/ride-requests",
            get(ride_requests::list_requests).post(ride_requests::create_request),
        )
        .route("/api/ride-requests/status", get(ride_requests::request_status))
        .route("/api/ride-requests/{id}/accept", post(ride_requests::accept_request))
        .route(
            "/api/ride-requests/{id}/accept/{driver_name}",
            post(ride_requests::accept_request_with_driver),
        )
        .route(
            "/api/ride-requests/progress/{driver_name}/{progress_id}",
            put(ride_requests::complete_progress),
        )
        .route("/api/submit-feedback", post(feedback::submit_feedback))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub(crate) type HandlerError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn bad_request(message: &str) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: message.to_string() }),
    )
}

pub(crate) fn not_found(message: &str) -> HandlerError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse { error: message.to_string() }),
    )
}

pub(crate) fn conflict(message: &str) -> HandlerError {
    (
        StatusCode::CONFLICT,
        Json(ErrorResponse { error: message.to_string() }),
    )
}

/// Logs the underlying error and returns a generic 500. Driver and gateway
/// messages stay in the logs, never in the response body.
pub(crate) fn internal_error(context: &str, err: anyhow::Error) -> HandlerError {
    tracing::error!("{}: {:#}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: format!("Failed to {}", context) }),
    )
}
