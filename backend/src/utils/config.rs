use anyhow::Result;
use std::env;
use crate::constants::{DEFAULT_SERVER_PORT, EXPO_PUSH_ENDPOINT};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub expo_push_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_SERVER_PORT),
            expo_push_url: env::var("EXPO_PUSH_URL")
                .unwrap_or_else(|_| EXPO_PUSH_ENDPOINT.to_string()),
        })
    }
}
