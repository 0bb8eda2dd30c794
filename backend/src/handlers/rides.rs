use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use crate::{
    db,
    models::{NewRide, Ride},
};
use super::{bad_request, internal_error, AppState, HandlerError};

#[derive(Debug, Serialize)]
pub struct CreateRideResponse {
    pub message: String,
    #[serde(rename = "rideId")]
    pub ride_id: i32,
}

pub async fn create_ride(
    State(state): State<AppState>,
    Json(ride): Json<NewRide>,
) -> Result<(StatusCode, Json<CreateRideResponse>), HandlerError> {
    if ride.driver_name.is_empty()
        || ride.vehicle_info.is_empty()
        || ride.origin.is_empty()
        || ride.destination.is_empty()
    {
        return Err(bad_request("Missing required fields"));
    }

    let (Some(available_seats), Some(ride_date), Some(ride_time)) =
        (ride.available_seats, ride.ride_date, ride.ride_time)
    else {
        return Err(bad_request("Missing required fields"));
    };

    let ride_id = db::rides::create_ride(
        &state.pool,
        &ride.driver_name,
        &ride.vehicle_info,
        &ride.origin,
        &ride.destination,
        available_seats,
        ride_date,
        ride_time,
    )
    .await
    .map_err(|e| internal_error("insert new ride", e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateRideResponse {
            message: "Ride added successfully".to_string(),
            ride_id,
        }),
    ))
}

/// Listing doubles as cleanup: offers whose departure has passed are
/// deleted before the remaining rows are returned.
pub async fn list_rides(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ride>>, HandlerError> {
    let purged = db::rides::delete_past_rides(&state.pool)
        .await
        .map_err(|e| internal_error("fetch rides", e))?;

    if purged > 0 {
        tracing::debug!(purged, "removed expired rides");
    }

    let rides = db::rides::list_rides(&state.pool)
        .await
        .map_err(|e| internal_error("fetch rides", e))?;

    Ok(Json(rides))
}
