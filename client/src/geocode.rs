use crate::error::{ClientError, Result};
use crate::geo::Coordinate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// OpenStreetMap's public geocoder.
pub const NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

const GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Resolves free-text location names to coordinates. External service; we
/// take the first hit and validate the numbers before using them.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    endpoint: String,
}

impl Geocoder {
    pub fn new() -> Self {
        Self::with_endpoint(NOMINATIM_ENDPOINT.to_string())
    }

    pub fn with_endpoint(endpoint: String) -> Self {
        // Nominatim requires an identifying User-Agent.
        let client = Client::builder()
            .timeout(GEOCODE_TIMEOUT)
            .user_agent("rideshare-cli")
            .build()
            .unwrap_or_else(|_| Client::new());

        Geocoder { client, endpoint }
    }

    pub async fn locate(&self, query: &str) -> Result<Coordinate> {
        let places: Vec<Place> = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .json()
            .await?;

        let Some(place) = places.first() else {
            return Err(ClientError::NoSuchPlace(query.to_string()));
        };

        let latitude: f64 = place
            .lat
            .parse()
            .map_err(|_| ClientError::InvalidCoordinate(place.lat.clone()))?;
        let longitude: f64 = place
            .lon
            .parse()
            .map_err(|_| ClientError::InvalidCoordinate(place.lon.clone()))?;

        Coordinate::new(latitude, longitude)
    }
}

impl Default for Geocoder {
    fn default() -> Self {
        Self::new()
    }
}
