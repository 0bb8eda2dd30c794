use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub phonenumber: String,
    pub gender: String,
    pub profile_picture: Option<String>,
    pub upi_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ride {
    pub id: i32,
    pub driver_name: String,
    pub vehicle_info: String,
    pub origin: String,
    pub destination: String,
    pub available_seats: i32,
    pub ride_date: String,
    pub ride_time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RideRequestSummary {
    pub id: i32,
    pub rider_name: String,
    pub gender: String,
    pub pickup_location: String,
    pub destination_location: String,
    pub contact: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct NewRide {
    pub driver_name: String,
    pub vehicle_info: String,
    pub origin: String,
    pub destination: String,
    pub available_seats: i32,
    pub ride_date: String,
    pub ride_time: String,
}

#[derive(Debug, Serialize)]
pub struct NewRideRequest {
    pub rider_name: String,
    pub gender: String,
    pub pickup_location: String,
    pub destination_location: String,
    pub contact: String,
    pub push_token: String,
}

#[derive(Debug, Serialize)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub role: String,
    pub feedback_text: String,
    pub rating: i32,
    pub issue: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct CreateRideResponse {
    #[serde(rename = "rideId")]
    pub ride_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateRequestResponse {
    #[serde(rename = "requestId")]
    pub request_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct AcceptResponse {
    #[serde(rename = "progressId")]
    pub progress_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Server-side ride request lifecycle as seen through the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RideStatus {
    Pending,
    Accepted,
    Other(String),
}

impl RideStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Pending" => RideStatus::Pending,
            "Accepted" => RideStatus::Accepted,
            other => RideStatus::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for RideStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RideStatus::Pending => write!(f, "Pending"),
            RideStatus::Accepted => write!(f, "Accepted"),
            RideStatus::Other(s) => write!(f, "{}", s),
        }
    }
}
