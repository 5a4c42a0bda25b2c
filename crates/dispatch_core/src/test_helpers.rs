//! Test helpers for common fixture setup.
//!
//! This module provides shared test utilities to reduce duplication across
//! test files. Coordinates are in the Lima metropolitan area, where the
//! operator runs its fleet.

use crate::request::TripRequest;
use crate::roster::DriverSnapshot;
use crate::spatial::Coordinate;

/// Standard client pickup point used across test files for consistency.
pub const CLIENT_LATITUDE: f64 = -12.045;
pub const CLIENT_LONGITUDE: f64 = -77.03;

/// The standard client pickup point.
pub fn client_location() -> Coordinate {
    Coordinate::new(CLIENT_LATITUDE, CLIENT_LONGITUDE)
}

/// A driver position roughly 0.56 km north of the client.
pub fn nearby_location() -> Coordinate {
    Coordinate::new(-12.04, -77.03)
}

/// A driver position roughly 6 km south of the client.
pub fn distant_location() -> Coordinate {
    Coordinate::new(-12.10, -77.03)
}

pub fn available_driver(driver_id: &str, location: Coordinate) -> DriverSnapshot {
    DriverSnapshot::new(driver_id, location, true)
}

pub fn unavailable_driver(driver_id: &str, location: Coordinate) -> DriverSnapshot {
    DriverSnapshot::new(driver_id, location, false)
}

/// A well-formed request from the standard client over the given roster.
pub fn request_with(drivers: Vec<DriverSnapshot>) -> TripRequest {
    TripRequest {
        client_location: client_location(),
        trip_details: "Pickup at San Borja clinic, wheelchair on board".to_string(),
        drivers,
    }
}
