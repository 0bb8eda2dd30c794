use crate::models::{ProfileUpdate, User};
use anyhow::Result;
use sqlx::MySqlPool;

const USER_COLUMNS: &str =
    "id, username, email, password, phonenumber, gender, profile_picture, upi_id, created_at";

pub async fn get_user_by_id(pool: &MySqlPool, user_id: i32) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_email(pool: &MySqlPool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Overwrites the mutable profile fields. Returns false when no such user.
pub async fn update_profile(pool: &MySqlPool, user_id: i32, update: &ProfileUpdate) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET email = ?, phonenumber = ?, gender = ?, upi_id = ?, profile_picture = ?
        WHERE id = ?
        "#,
    )
    .bind(&update.email)
    .bind(&update.mobile)
    .bind(&update.gender)
    .bind(&update.upi_id)
    .bind(&update.profile_picture)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn update_upi(pool: &MySqlPool, user_id: i32, upi_id: &str) -> Result<bool> {
    let result = sqlx::query("UPDATE users SET upi_id = ? WHERE id = ?")
        .bind(upi_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
