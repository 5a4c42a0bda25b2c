//! Spatial operations: geographic coordinates and great-circle distances.
//!
//! This module provides:
//!
//! - **Coordinate**: latitude/longitude value type with range checking
//! - **Distance calculations**: haversine distance between coordinates
//!
//! Distances are returned in kilometers on a mean Earth radius of 6371 km.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position as decimal-degree latitude and longitude.
///
/// Valid latitudes lie in [-90, 90] and longitudes in [-180, 180];
/// `is_in_range` checks both. The engine validates the client position up
/// front and drops roster entries with out-of-range positions, so distance
/// calculations only ever see in-range coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are within the valid geographic range.
    /// NaN components fail the range checks.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Haversine great-circle distance between two coordinates, in kilometers.
///
/// Pure and symmetric; `distance_km(a, a)` is 0. Also used verbatim for the
/// `distance_km` reported in a dispatch result, so the ranking metric and the
/// reported value cannot drift apart.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lon1) = (a.latitude.to_radians(), a.longitude.to_radians());
    let (lat2, lon2) = (b.latitude.to_radians(), b.longitude.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
