use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use crate::constants::{PUSH_GATEWAY_TIMEOUT_SECS, PUSH_SOUND_DEFAULT, RIDE_ACCEPTED_MESSAGE};

// Expo token shapes: ExponentPushToken[xxxx] or ExpoPushToken[xxxx]
static EXPO_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Expo(nent)?PushToken\[[^\]\s]+\]$").unwrap());

/// Returns true when the token looks like something the Expo gateway can
/// route. Format check only; deliverability is never confirmed.
pub fn is_expo_push_token(token: &str) -> bool {
    EXPO_TOKEN_RE.is_match(token)
}

#[derive(Debug, Serialize)]
struct PushMessage<'a> {
    to: &'a str,
    sound: &'a str,
    body: &'a str,
    data: PushData,
}

#[derive(Debug, Serialize)]
struct PushData {
    #[serde(rename = "requestId")]
    request_id: i32,
}

/// Thin client for the Expo push gateway. Fire-and-forget: the gateway
/// accepting the message is the end of our responsibility.
#[derive(Debug, Clone)]
pub struct PushService {
    client: Client,
    endpoint: String,
}

impl PushService {
    pub fn new(endpoint: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(PUSH_GATEWAY_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, endpoint }
    }

    pub async fn send_ride_accepted(&self, token: &str, request_id: i32) -> Result<()> {
        let messages = [PushMessage {
            to: token,
            sound: PUSH_SOUND_DEFAULT,
            body: RIDE_ACCEPTED_MESSAGE,
            data: PushData { request_id },
        }];

        let response = self
            .client
            .post(&self.endpoint)
            .json(&messages)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("push gateway returned status {}", response.status());
        }

        tracing::info!(request_id, "push notification handed to gateway");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exponent_token() {
        assert!(is_expo_push_token("ExponentPushToken[abc123XYZ]"));
    }

    #[test]
    fn test_accepts_expo_token() {
        assert!(is_expo_push_token("ExpoPushToken[abc123XYZ]"));
    }

    #[test]
    fn test_rejects_bare_strings() {
        assert!(!is_expo_push_token("abc123"));
        assert!(!is_expo_push_token("ExponentPushToken[]"));
        assert!(!is_expo_push_token("ExponentPushToken[abc"));
        assert!(!is_expo_push_token(""));
    }
}
