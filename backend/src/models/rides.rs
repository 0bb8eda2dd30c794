use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ride {
    pub id: i32,
    pub driver_name: String,
    pub vehicle_info: String,
    pub origin: String,
    pub destination: String,
    pub available_seats: i32,
    pub ride_date: NaiveDate,
    pub ride_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewRide {
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub vehicle_info: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    pub available_seats: Option<i32>,
    pub ride_date: Option<NaiveDate>,
    pub ride_time: Option<NaiveTime>,
}
