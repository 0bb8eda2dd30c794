use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use crate::{
    db::{self, AcceptOutcome},
    models::{NewRideRequest, RideRequestSummary},
    services,
};
use super::{bad_request, conflict, internal_error, not_found, AppState, HandlerError, MessageResponse};

#[derive(Debug, Serialize)]
pub struct CreateRequestResponse {
    pub message: String,
    #[serde(rename = "requestId")]
    pub request_id: i32,
}

pub async fn create_request(
    State(state): State<AppState>,
    Json(req): Json<NewRideRequest>,
) -> Result<(StatusCode, Json<CreateRequestResponse>), HandlerError> {
    if req.missing_field() {
        return Err(bad_request("Missing required fields"));
    }

    let request_id = db::ride_requests::create_request(&state.pool, &req)
        .await
        .map_err(|e| internal_error("submit ride request", e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateRequestResponse {
            message: "Ride request created successfully".to_string(),
            request_id,
        }),
    ))
}

pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<RideRequestSummary>>, HandlerError> {
    let requests = db::ride_requests::list_requests(&state.pool)
        .await
        .map_err(|e| internal_error("fetch ride requests", e))?;

    Ok(Json(requests))
}

#[derive(Debug, Deserialize)]
pub struct AcceptBody {
    #[serde(default)]
    pub driver_name: String,
}

#[derive(Debug, Serialize)]
pub struct AcceptResponse {
    pub message: String,
    #[serde(rename = "progressId")]
    pub progress_id: i32,
}

pub async fn accept_request(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
    Json(body): Json<AcceptBody>,
) -> Result<Json<AcceptResponse>, HandlerError> {
    do_accept(state, request_id, body.driver_name).await
}

/// Older clients pass the driver name as a path segment instead of a body.
pub async fn accept_request_with_driver(
    State(state): State<AppState>,
    Path((request_id, driver_name)): Path<(i32, String)>,
) -> Result<Json<AcceptResponse>, HandlerError> {
    do_accept(state, request_id, driver_name).await
}

async fn do_accept(
    state: AppState,
    request_id: i32,
    driver_name: String,
) -> Result<Json<AcceptResponse>, HandlerError> {
    if driver_name.is_empty() {
        return Err(bad_request("Missing driver_name"));
    }

    // Token format is checked before anything is written, so a malformed
    // token can never leave the request half-accepted.
    let request = db::ride_requests::get_request(&state.pool, request_id)
        .await
        .map_err(|e| internal_error("accept ride request", e))?
        .ok_or_else(|| not_found("Ride request not found"))?;

    if !services::is_expo_push_token(&request.push_token) {
        return Err(bad_request("Invalid Expo push token"));
    }

    let outcome = db::ride_requests::accept_request(&state.pool, request_id, &driver_name)
        .await
        .map_err(|e| internal_error("accept ride request", e))?;

    let progress_id = match outcome {
        AcceptOutcome::Accepted { progress_id } => progress_id,
        AcceptOutcome::NotFound => return Err(not_found("Ride request not found")),
        AcceptOutcome::AlreadyAccepted => {
            return Err(conflict("Ride request already accepted"));
        }
    };

    // Notification is fire-and-forget after commit. Delivery problems are a
    // gateway concern and must not fail an accept that already happened.
    let push = state.push.clone();
    let token = request.push_token.clone();
    tokio::spawn(async move {
        if let Err(e) = push.send_ride_accepted(&token, request_id).await {
            tracing::warn!(request_id, "failed to send accept notification: {:#}", e);
        }
    });

    Ok(Json(AcceptResponse {
        message: "Ride accepted".to_string(),
        progress_id,
    }))
}

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    #[serde(rename = "requestId")]
    pub request_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn request_status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Result<Json<StatusResponse>, HandlerError> {
    let Some(request_id) = params.request_id else {
        return Err(bad_request("Missing requestId parameter"));
    };

    let status = db::ride_requests::get_status(&state.pool, request_id)
        .await
        .map_err(|e| internal_error("retrieve ride status", e))?
        .ok_or_else(|| not_found("Ride request not found"))?;

    Ok(Json(StatusResponse { status }))
}

pub async fn complete_progress(
    State(state): State<AppState>,
    Path((driver_name, progress_id)): Path<(String, i32)>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let completed = db::ride_requests::complete_progress(&state.pool, &driver_name, progress_id)
        .await
        .map_err(|e| internal_error("update ride progress", e))?;

    if !completed {
        return Err(not_found("No matching trip in progress"));
    }

    Ok(Json(MessageResponse {
        message: "Ride marked as completed".to_string(),
    }))
}
