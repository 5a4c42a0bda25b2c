//! Driver roster types: the caller-supplied view of the fleet.
//!
//! The engine never owns the roster. Callers hand in a `Vec<DriverSnapshot>`
//! per dispatch call and keep the source of truth (storage, live feed) to
//! themselves; nothing here outlives the call.

use serde::{Deserialize, Serialize};

use crate::spatial::Coordinate;

/// Operational status of a driver as tracked by the roster source.
///
/// Only `Available` drivers are eligible for dispatch; `InTrip` and
/// `Offline` both map to unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverStatus {
    Available,
    InTrip,
    Offline,
}

impl DriverStatus {
    pub fn is_available(self) -> bool {
        self == DriverStatus::Available
    }
}

/// Point-in-time view of one driver, owned by the caller for the duration of
/// a single dispatch call. The engine treats duplicate `driver_id` entries
/// independently and never mutates or deduplicates the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverSnapshot {
    pub driver_id: String,
    pub location: Coordinate,
    pub is_available: bool,
}

impl DriverSnapshot {
    pub fn new(driver_id: impl Into<String>, location: Coordinate, is_available: bool) -> Self {
        Self {
            driver_id: driver_id.into(),
            location,
            is_available,
        }
    }

    /// Build a snapshot from a roster-side status value.
    pub fn from_status(
        driver_id: impl Into<String>,
        location: Coordinate,
        status: DriverStatus,
    ) -> Self {
        Self::new(driver_id, location, status.is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_available_status_maps_to_available() {
        assert!(DriverStatus::Available.is_available());
        assert!(!DriverStatus::InTrip.is_available());
        assert!(!DriverStatus::Offline.is_available());
    }

    #[test]
    fn from_status_sets_availability_flag() {
        let loc = Coordinate::new(-12.045, -77.03);
        assert!(DriverSnapshot::from_status("D1", loc, DriverStatus::Available).is_available);
        assert!(!DriverSnapshot::from_status("D2", loc, DriverStatus::InTrip).is_available);
    }

    #[test]
    fn snapshot_serializes_with_camel_case_fields() {
        let snapshot = DriverSnapshot::new("D1", Coordinate::new(-12.045, -77.03), true);
        let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
        assert!(json.contains("\"driverId\""));
        assert!(json.contains("\"isAvailable\""));
    }
}
