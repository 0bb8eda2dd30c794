use crate::constants::{PROGRESS_COMPLETED, PROGRESS_ON_PROGRESS, STATUS_ACCEPTED, STATUS_PENDING};
use crate::models::{NewRideRequest, RideRequest, RideRequestSummary};
use anyhow::Result;
use sqlx::MySqlPool;

const REQUEST_COLUMNS: &str =
    "id, rider_name, gender, pickup_location, destination_location, contact, push_token, status, created_at";

/// Outcome of a driver's attempt to accept a ride request.
#[derive(Debug)]
pub enum AcceptOutcome {
    /// The request transitioned Pending -> Accepted and a progress row exists.
    Accepted { progress_id: i32 },
    /// No ride request with that id.
    NotFound,
    /// The request was already accepted; nothing was changed.
    AlreadyAccepted,
}

pub async fn create_request(pool: &MySqlPool, req: &NewRideRequest) -> Result<i32> {
    let result = sqlx::query(
        r#"
        INSERT INTO ride_requests (rider_name, gender, pickup_location, destination_location, contact, push_token, status)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&req.rider_name)
    .bind(&req.gender)
    .bind(&req.pickup_location)
    .bind(&req.destination_location)
    .bind(&req.contact)
    .bind(&req.push_token)
    .bind(STATUS_PENDING)
    .execute(pool)
    .await?;

    Ok(result.last_insert_id() as i32)
}

pub async fn list_requests(pool: &MySqlPool) -> Result<Vec<RideRequestSummary>> {
    let requests = sqlx::query_as::<_, RideRequestSummary>(
        r#"
        SELECT id, rider_name, gender, pickup_location, destination_location, contact, status
        FROM ride_requests
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(requests)
}

pub async fn get_request(pool: &MySqlPool, request_id: i32) -> Result<Option<RideRequest>> {
    let request = sqlx::query_as::<_, RideRequest>(&format!(
        "SELECT {REQUEST_COLUMNS} FROM ride_requests WHERE id = ?"
    ))
    .bind(request_id)
    .fetch_optional(pool)
    .await?;

    Ok(request)
}

pub async fn get_status(pool: &MySqlPool, request_id: i32) -> Result<Option<String>> {
    let status = sqlx::query_scalar::<_, String>(
        "SELECT status FROM ride_requests WHERE id = ?",
    )
    .bind(request_id)
    .fetch_optional(pool)
    .await?;

    Ok(status)
}

/// Accepts a ride request on behalf of a driver.
///
/// The status flip and the progress insert run in one transaction, and the
/// UPDATE is conditional on the row still being Pending. A second accept of
/// the same id therefore rolls back with `AlreadyAccepted` instead of
/// creating a duplicate progress row.
pub async fn accept_request(
    pool: &MySqlPool,
    request_id: i32,
    driver_name: &str,
) -> Result<AcceptOutcome> {
    let mut tx = pool.begin().await?;

    let request = sqlx::query_as::<_, RideRequest>(&format!(
        "SELECT {REQUEST_COLUMNS} FROM ride_requests WHERE id = ? FOR UPDATE"
    ))
    .bind(request_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(request) = request else {
        return Ok(AcceptOutcome::NotFound);
    };

    let updated = sqlx::query(
        "UPDATE ride_requests SET status = ? WHERE id = ? AND status = ?",
    )
    .bind(STATUS_ACCEPTED)
    .bind(request_id)
    .bind(STATUS_PENDING)
    .execute(&mut *tx)
    .await?;

    if updated.rows_affected() == 0 {
        return Ok(AcceptOutcome::AlreadyAccepted);
    }

    let inserted = sqlx::query(
        r#"
        INSERT INTO progress (rider_name, pickup_location, destination_location, driver_name, progress)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&request.rider_name)
    .bind(&request.pickup_location)
    .bind(&request.destination_location)
    .bind(driver_name)
    .bind(PROGRESS_ON_PROGRESS)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(AcceptOutcome::Accepted {
        progress_id: inserted.last_insert_id() as i32,
    })
}

/// Marks a trip completed. Conditional on the row still being in progress
/// and belonging to the named driver, so repeated calls do not re-complete.
/// Returns false when nothing matched.
pub async fn complete_progress(
    pool: &MySqlPool,
    driver_name: &str,
    progress_id: i32,
) -> Result<bool> {
    let result = sqlx::query(
        "UPDATE progress SET progress = ? WHERE id = ? AND driver_name = ? AND progress = ?",
    )
    .bind(PROGRESS_COMPLETED)
    .bind(progress_id)
    .bind(driver_name)
    .bind(PROGRESS_ON_PROGRESS)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
