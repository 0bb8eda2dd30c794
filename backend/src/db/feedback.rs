use crate::models::NewFeedback;
use anyhow::Result;
use sqlx::MySqlPool;

pub async fn create_feedback(pool: &MySqlPool, feedback: &NewFeedback) -> Result<i32> {
    let result = sqlx::query(
        r#"
        INSERT INTO feedback (name, email, role, feedback_text, rating, issue)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&feedback.name)
    .bind(&feedback.email)
    .bind(&feedback.role)
    .bind(&feedback.feedback_text)
    .bind(feedback.rating.unwrap_or(0))
    .bind(&feedback.issue)
    .execute(pool)
    .await?;

    Ok(result.last_insert_id() as i32)
}
