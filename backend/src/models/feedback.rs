use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub feedback_text: String,
    pub rating: i32,
    pub issue: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewFeedback {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub feedback_text: String,
    pub rating: Option<i32>,
    #[serde(default)]
    pub issue: String,
}

impl NewFeedback {
    pub fn missing_field(&self) -> bool {
        self.name.is_empty()
            || self.email.is_empty()
            || self.role.is_empty()
            || self.feedback_text.is_empty()
            || self.rating.is_none()
            || self.issue.is_empty()
    }
}
