use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    // Stored in the clear (legacy schema); never echoed back in responses.
    #[serde(skip_serializing)]
    pub password: String,
    pub phonenumber: String,
    pub gender: String,
    pub profile_picture: Option<String>,
    pub upi_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub upi_id: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpiUpdate {
    #[serde(default)]
    pub upi_id: String,
}
