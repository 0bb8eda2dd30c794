use crate::models::Ride;
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use sqlx::MySqlPool;

pub async fn create_ride(
    pool: &MySqlPool,
    driver_name: &str,
    vehicle_info: &str,
    origin: &str,
    destination: &str,
    available_seats: i32,
    ride_date: NaiveDate,
    ride_time: NaiveTime,
) -> Result<i32> {
    let result = sqlx::query(
        r#"
        INSERT INTO rides (driver_name, vehicle_info, origin, destination, available_seats, ride_date, ride_time)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(driver_name)
    .bind(vehicle_info)
    .bind(origin)
    .bind(destination)
    .bind(available_seats)
    .bind(ride_date)
    .bind(ride_time)
    .execute(pool)
    .await?;

    Ok(result.last_insert_id() as i32)
}

pub async fn list_rides(pool: &MySqlPool) -> Result<Vec<Ride>> {
    let rides = sqlx::query_as::<_, Ride>(
        r#"
        SELECT id, driver_name, vehicle_info, origin, destination, available_seats, ride_date, ride_time, created_at
        FROM rides
        ORDER BY ride_date, ride_time
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rides)
}

/// Lazy purge of rides whose departure is already in the past. Runs as part
/// of the fetch-all endpoint, so the listing never shows stale offers.
pub async fn delete_past_rides(pool: &MySqlPool) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM rides
        WHERE ride_date < CURDATE()
           OR (ride_date = CURDATE() AND ride_time < CURTIME())
        "#,
    )
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
