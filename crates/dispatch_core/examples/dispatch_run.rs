//! Dispatch a sample trip request against a small roster and print the
//! outcome as JSON.
//!
//! Run with: cargo run -p dispatch_core --example dispatch_run

use dispatch_core::engine::{DispatchEngine, DispatchOutcome};
use dispatch_core::request::{TripRequest, ValidationConfig};
use dispatch_core::roster::{DriverSnapshot, DriverStatus};
use dispatch_core::spatial::Coordinate;

fn main() {
    // Intake-form strictness: at least 10 meaningful characters of detail.
    let engine = DispatchEngine::default().with_validation(ValidationConfig {
        min_trip_details_chars: 10,
    });

    let request = TripRequest {
        client_location: Coordinate::new(-12.045, -77.03),
        trip_details: "Dialysis appointment at 9:00, wheelchair required".to_string(),
        drivers: vec![
            DriverSnapshot::from_status(
                "DRV-001",
                Coordinate::new(-12.04, -77.03),
                DriverStatus::Available,
            ),
            DriverSnapshot::from_status(
                "DRV-002",
                Coordinate::new(-12.10, -77.03),
                DriverStatus::Available,
            ),
            DriverSnapshot::from_status(
                "DRV-003",
                Coordinate::new(-12.046, -77.031),
                DriverStatus::InTrip,
            ),
        ],
    };

    let outcome = engine.dispatch(&request);

    match &outcome {
        DispatchOutcome::Assigned(result) => {
            println!("--- Dispatch ({} roster entries) ---", request.drivers.len());
            println!("Driver:   {}", result.driver_id);
            println!("Distance: {:.2} km", result.distance_km);
            println!("Reason:   {}", result.reason);
        }
        DispatchOutcome::NoAvailableDriver => {
            println!("No driver available; queue the request or alert an operator.");
        }
        DispatchOutcome::InvalidRequest(reason) => {
            println!("Request rejected: {}", reason);
        }
    }

    let json = serde_json::to_string_pretty(&outcome).expect("outcome serializes");
    println!("\nJSON outcome:\n{}", json);
}
