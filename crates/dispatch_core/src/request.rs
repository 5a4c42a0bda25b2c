//! Trip request input and its validation.
//!
//! Validation is fail-fast: the first violated check produces the reason
//! string the caller sees, and later checks are not evaluated. An empty
//! roster is deliberately not a validation failure; it is a legitimate input
//! that yields `NoAvailableDriver` downstream.

use serde::{Deserialize, Serialize};

use crate::roster::DriverSnapshot;
use crate::spatial::Coordinate;

/// One client's ask for transport: origin location, free-text trip details
/// (pickup time, destination, mobility requirements), and a snapshot of the
/// driver roster to choose from. Transient; exists only for one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub client_location: Coordinate,
    pub trip_details: String,
    pub drivers: Vec<DriverSnapshot>,
}

/// Tunable strictness for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Minimum number of non-whitespace characters required in
    /// `trip_details` after trimming. The dispatch intake form historically
    /// required 10; the engine default only rejects effectively-empty text.
    pub min_trip_details_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_trip_details_chars: 1,
        }
    }
}

/// Validate a request before it reaches filtering and ranking.
///
/// Returns `None` when the request is well formed, or the first failing
/// check's reason. Checks in order: client latitude range, client longitude
/// range, trip-details length.
pub fn validate_request(request: &TripRequest, config: &ValidationConfig) -> Option<String> {
    let client = request.client_location;
    if !(-90.0..=90.0).contains(&client.latitude) {
        return Some(format!(
            "invalid coordinates: latitude {} outside [-90, 90]",
            client.latitude
        ));
    }
    if !(-180.0..=180.0).contains(&client.longitude) {
        return Some(format!(
            "invalid coordinates: longitude {} outside [-180, 180]",
            client.longitude
        ));
    }

    let details_chars = request
        .trip_details
        .chars()
        .filter(|c| !c.is_whitespace())
        .count();
    if details_chars < config.min_trip_details_chars {
        return Some(format!(
            "trip details must contain at least {} non-whitespace character(s)",
            config.min_trip_details_chars
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> TripRequest {
        TripRequest {
            client_location: Coordinate::new(-12.045, -77.03),
            trip_details: "Pickup at clinic, drop-off at home".to_string(),
            drivers: Vec::new(),
        }
    }

    #[test]
    fn accepts_valid_request_with_empty_roster() {
        let request = valid_request();
        assert_eq!(validate_request(&request, &ValidationConfig::default()), None);
    }

    #[test]
    fn latitude_check_runs_before_longitude_check() {
        let mut request = valid_request();
        request.client_location = Coordinate::new(200.0, 500.0);
        let reason = validate_request(&request, &ValidationConfig::default())
            .expect("out-of-range coordinates must fail");
        assert!(reason.contains("latitude"), "got: {}", reason);
    }

    #[test]
    fn rejects_whitespace_only_details() {
        let mut request = valid_request();
        request.trip_details = "   \t\n".to_string();
        let reason = validate_request(&request, &ValidationConfig::default())
            .expect("blank details must fail");
        assert!(reason.contains("trip details"), "got: {}", reason);
    }

    #[test]
    fn stricter_minimum_rejects_short_details() {
        let mut request = valid_request();
        request.trip_details = "short".to_string();
        let config = ValidationConfig {
            min_trip_details_chars: 10,
        };
        assert!(validate_request(&request, &config).is_some());
        assert_eq!(validate_request(&request, &ValidationConfig::default()), None);
    }
}
