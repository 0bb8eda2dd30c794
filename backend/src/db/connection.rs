use anyhow::Result;
use sqlx::{MySqlPool, mysql::MySqlPoolOptions};
use std::env;
use dotenvy::dotenv;
use crate::constants::DEFAULT_DB_MAX_CONNECTIONS;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Ok(Self {
            database_url: database_url_from_env()?,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DB_MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
        })
    }
}

/// DATABASE_URL wins when set; otherwise the URL is assembled from the
/// individual DB_HOST / DB_USER / DB_PASSWORD / DB_NAME variables.
fn database_url_from_env() -> Result<String> {
    if let Ok(url) = env::var("DATABASE_URL") {
        return Ok(url);
    }

    let host = env::var("DB_HOST").map_err(|_| anyhow::anyhow!("DB_HOST must be set"))?;
    let user = env::var("DB_USER").map_err(|_| anyhow::anyhow!("DB_USER must be set"))?;
    let password = env::var("DB_PASSWORD").unwrap_or_default();
    let name = env::var("DB_NAME").map_err(|_| anyhow::anyhow!("DB_NAME must be set"))?;

    Ok(format!("mysql://{}:{}@{}/{}", user, password, host, name))
}

pub async fn get_db_pool(config: &DatabaseConfig) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    Ok(pool)
}
