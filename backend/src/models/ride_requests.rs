use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RideRequest {
    pub id: i32,
    pub rider_name: String,
    pub gender: String,
    pub pickup_location: String,
    pub destination_location: String,
    pub contact: String,
    pub push_token: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// The columns drivers get to see when browsing requests. The push token is
/// internal routing data and stays out of this view.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RideRequestSummary {
    pub id: i32,
    pub rider_name: String,
    pub gender: String,
    pub pickup_location: String,
    pub destination_location: String,
    pub contact: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct NewRideRequest {
    #[serde(default)]
    pub rider_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub destination_location: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub push_token: String,
}

impl NewRideRequest {
    pub fn missing_field(&self) -> bool {
        self.rider_name.is_empty()
            || self.gender.is_empty()
            || self.pickup_location.is_empty()
            || self.destination_location.is_empty()
            || self.contact.is_empty()
            || self.push_token.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Progress {
    pub id: i32,
    pub rider_name: String,
    pub pickup_location: String,
    pub destination_location: String,
    pub driver_name: String,
    pub progress: String,
    pub created_at: DateTime<Utc>,
}
