use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use crate::{
    db,
    models::{ProfileUpdate, UpiUpdate, User},
};
use super::{bad_request, internal_error, not_found, AppState, HandlerError, MessageResponse};

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Credential check is a plain string compare against the stored password.
/// The legacy schema keeps passwords in the clear; hardening the auth path
/// is out of scope here.
pub async fn login(
    State(state): State<AppState>,
    Query(params): Query<LoginParams>,
) -> Result<Json<LoginResponse>, HandlerError> {
    if params.email.is_empty() || params.password.is_empty() {
        return Err(bad_request("Missing email or password"));
    }

    let user = db::users::get_user_by_email(&state.pool, &params.email)
        .await
        .map_err(|e| internal_error("log in", e))?
        .ok_or_else(|| bad_request("User not found"))?;

    if params.password != user.password {
        return Err(bad_request("Invalid credentials"));
    }

    Ok(Json(LoginResponse { user }))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<User>, HandlerError> {
    let user = db::users::get_user_by_id(&state.pool, user_id)
        .await
        .map_err(|e| internal_error("fetch user", e))?
        .ok_or_else(|| not_found("User not found"))?;

    Ok(Json(user))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<MessageResponse>, HandlerError> {
    if update.email.is_empty() || update.mobile.is_empty() || update.gender.is_empty() {
        return Err(bad_request("Missing required fields"));
    }

    let updated = db::users::update_profile(&state.pool, user_id, &update)
        .await
        .map_err(|e| internal_error("update profile", e))?;

    if !updated {
        return Err(not_found("User not found"));
    }

    Ok(Json(MessageResponse {
        message: "Profile updated successfully".to_string(),
    }))
}

pub async fn update_upi(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(update): Json<UpiUpdate>,
) -> Result<(StatusCode, Json<MessageResponse>), HandlerError> {
    if update.upi_id.is_empty() {
        return Err(bad_request("Missing upi_id"));
    }

    let updated = db::users::update_upi(&state.pool, user_id, &update.upi_id)
        .await
        .map_err(|e| internal_error("update UPI id", e))?;

    if !updated {
        return Err(not_found("User not found"));
    }

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "UPI id updated successfully".to_string(),
        }),
    ))
}
