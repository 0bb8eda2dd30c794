use crate::error::{ClientError, Result};
use serde::Deserialize;

/// Mean Earth radius in kilometers, as used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Flat amount charged on every trip.
pub const BASE_FARE: f64 = 50.0;

/// Per-kilometer rate on top of the base fare.
pub const FARE_PER_KM: f64 = 10.0;

/// Assumed average trip speed for the ETA estimate.
pub const AVERAGE_SPEED_KMH: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Rejects non-finite components up front. Geocoders hand back strings,
    /// and a NaN that slips through here would poison every figure computed
    /// downstream without ever failing loudly.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ClientError::InvalidCoordinate(format!(
                "({}, {})",
                latitude, longitude
            )));
        }
        Ok(Coordinate { latitude, longitude })
    }
}

/// Great-circle distance between two points in kilometers (Haversine),
/// rounded to two decimal places.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let distance = 2.0 * EARTH_RADIUS_KM * h.sqrt().asin();

    round2(distance)
}

/// Minutes to cover the distance at the assumed average speed.
pub fn eta_minutes(distance_km: f64) -> i64 {
    (distance_km / AVERAGE_SPEED_KMH * 60.0).round() as i64
}

pub fn fare(distance_km: f64) -> f64 {
    BASE_FARE + FARE_PER_KM * distance_km
}

/// Fare as the two-decimal string shown to riders, e.g. "100.00".
pub fn fare_display(distance_km: f64) -> String {
    format!("{:.2}", fare(distance_km))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
