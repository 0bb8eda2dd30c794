use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use crate::{db, models::NewFeedback};
use super::{bad_request, internal_error, AppState, HandlerError};

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub message: String,
    #[serde(rename = "feedbackId")]
    pub feedback_id: i32,
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(feedback): Json<NewFeedback>,
) -> Result<(StatusCode, Json<FeedbackResponse>), HandlerError> {
    if feedback.missing_field() {
        return Err(bad_request("Missing required fields"));
    }

    let feedback_id = db::feedback::create_feedback(&state.pool, &feedback)
        .await
        .map_err(|e| internal_error("submit feedback", e))?;

    Ok((
        StatusCode::CREATED,
        Json(FeedbackResponse {
            message: "Feedback submitted successfully".to_string(),
            feedback_id,
        }),
    ))
}
