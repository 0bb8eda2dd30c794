use crate::error::{ClientError, Result};
use crate::models::{
    AcceptResponse, CreateRequestResponse, CreateRideResponse, LoginResponse, NewFeedback,
    NewRide, NewRideRequest, Ride, RideRequestSummary, RideStatus, StatusResponse, User,
};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Per-request timeout. A hung server fails the call instead of hanging the
/// caller forever.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Typed wrapper over the rideshare HTTP API, one method per endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let response = self
            .client
            .get(self.url("/api/login"))
            .query(&[("email", email), ("password", password)])
            .send()
            .await?;

        let body: LoginResponse = check(response).await?.json().await?;
        Ok(body.user)
    }

    pub async fn get_user(&self, user_id: i32) -> Result<User> {
        let response = self
            .client
            .get(self.url(&format!("/api/users/{}", user_id)))
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    pub async fn update_upi(&self, user_id: i32, upi_id: &str) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!("/api/users/{}/upi", user_id)))
            .json(&json!({ "upi_id": upi_id }))
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }

    pub async fn post_ride(&self, ride: &NewRide) -> Result<i32> {
        let response = self
            .client
            .post(self.url("/api/rides"))
            .json(ride)
            .send()
            .await?;

        let body: CreateRideResponse = check(response).await?.json().await?;
        Ok(body.ride_id)
    }

    pub async fn list_rides(&self) -> Result<Vec<Ride>> {
        let response = self.client.get(self.url("/api/rides")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn create_ride_request(&self, request: &NewRideRequest) -> Result<i32> {
        let response = self
            .client
            .post(self.url("/api/ride-requests"))
            .json(request)
            .send()
            .await?;

        let body: CreateRequestResponse = check(response).await?.json().await?;
        Ok(body.request_id)
    }

    pub async fn list_ride_requests(&self) -> Result<Vec<RideRequestSummary>> {
        let response = self
            .client
            .get(self.url("/api/ride-requests"))
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    pub async fn accept_request(&self, request_id: i32, driver_name: &str) -> Result<i32> {
        let response = self
            .client
            .post(self.url(&format!("/api/ride-requests/{}/accept", request_id)))
            .json(&json!({ "driver_name": driver_name }))
            .send()
            .await?;

        let body: AcceptResponse = check(response).await?.json().await?;
        Ok(body.progress_id)
    }

    pub async fn request_status(&self, request_id: i32) -> Result<RideStatus> {
        let response = self
            .client
            .get(self.url("/api/ride-requests/status"))
            .query(&[("requestId", request_id)])
            .send()
            .await?;

        let body: StatusResponse = check(response).await?.json().await?;
        Ok(RideStatus::parse(&body.status))
    }

    pub async fn complete_progress(&self, driver_name: &str, progress_id: i32) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!(
                "/api/ride-requests/progress/{}/{}",
                driver_name, progress_id
            )))
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }

    pub async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<()> {
        let response = self
            .client
            .post(self.url("/api/submit-feedback"))
            .json(feedback)
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }
}

/// Maps non-success statuses onto error kinds the poller can discriminate:
/// 404 is permanent, other 4xx are rejections, 5xx are transient.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.text().await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .unwrap_or(text),
        Err(_) => String::new(),
    };

    if status == StatusCode::NOT_FOUND {
        Err(ClientError::NotFound(message))
    } else if status.is_client_error() {
        Err(ClientError::Rejected(message))
    } else {
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
