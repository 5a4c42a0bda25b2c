//! Dispatch orchestration: validate, filter, rank, select.
//!
//! One call, one terminal outcome. The engine keeps no state between calls
//! and performs no I/O; marking the chosen driver unavailable (or queueing
//! the request when nobody is free) is the caller's follow-up, not ours.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::matching::{available_candidates, ClosestDriver, RankingPolicy};
use crate::request::{validate_request, TripRequest, ValidationConfig};

/// A successful assignment: the chosen driver, why, and how far away.
///
/// `distance_km` is computed by the same haversine formula used for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    pub driver_id: String,
    pub reason: String,
    pub distance_km: f64,
}

/// Terminal outcome of one dispatch call. Exactly one of:
///
/// - `Assigned`: a driver was selected;
/// - `NoAvailableDriver`: valid request, empty candidate set after
///   filtering (not an error; callers queue or alert an operator);
/// - `InvalidRequest`: malformed input, with the first failing check's
///   reason surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DispatchOutcome {
    Assigned(DispatchResult),
    NoAvailableDriver,
    InvalidRequest(String),
}

/// Orchestrates one trip-to-driver dispatch per call.
///
/// Holds the ranking policy behind `Box<dyn RankingPolicy>` so callers can
/// swap selection strategies without touching the pipeline. Stateless across
/// calls and safe to share between threads.
pub struct DispatchEngine {
    policy: Box<dyn RankingPolicy>,
    validation: ValidationConfig,
}

impl Default for DispatchEngine {
    fn default() -> Self {
        Self::new(Box::new(ClosestDriver))
    }
}

impl DispatchEngine {
    pub fn new(policy: Box<dyn RankingPolicy>) -> Self {
        Self {
            policy,
            validation: ValidationConfig::default(),
        }
    }

    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Run one dispatch call: validate the request, filter the roster to
    /// eligible candidates, rank them, and assign the best one.
    pub fn dispatch(&self, request: &TripRequest) -> DispatchOutcome {
        if let Some(reason) = validate_request(request, &self.validation) {
            debug!("dispatch rejected: {}", reason);
            return DispatchOutcome::InvalidRequest(reason);
        }

        let candidates = available_candidates(&request.drivers);
        if candidates.is_empty() {
            debug!(
                "no candidates after filtering {} roster entries",
                request.drivers.len()
            );
            return DispatchOutcome::NoAvailableDriver;
        }

        let ranked = self.policy.rank(request.client_location, &candidates);
        let Some(winner) = ranked.into_iter().next() else {
            return DispatchOutcome::NoAvailableDriver;
        };

        let reason = self.policy.justification(&winner);
        info!(
            "dispatched driver {} at {:.2} km",
            winner.driver_id, winner.distance_km
        );
        DispatchOutcome::Assigned(DispatchResult {
            driver_id: winner.driver_id,
            reason,
            distance_km: winner.distance_km,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::EtaWeighted;
    use crate::test_helpers::{available_driver, client_location, nearby_location, request_with};

    #[test]
    fn default_engine_uses_closest_driver_policy() {
        let engine = DispatchEngine::default();
        let request = request_with(vec![available_driver("D1", nearby_location())]);
        match engine.dispatch(&request) {
            DispatchOutcome::Assigned(result) => {
                assert_eq!(result.driver_id, "D1");
                assert!(result.reason.contains("closest available driver"));
            }
            other => panic!("expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn engine_accepts_alternative_policy() {
        let engine = DispatchEngine::new(Box::new(EtaWeighted::default()));
        let request = request_with(vec![available_driver("D1", nearby_location())]);
        match engine.dispatch(&request) {
            DispatchOutcome::Assigned(result) => {
                assert!(result.reason.contains("pickup estimate"));
            }
            other => panic!("expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn result_distance_is_distance_to_selected_driver() {
        let engine = DispatchEngine::default();
        let driver_pos = nearby_location();
        let request = request_with(vec![available_driver("D1", driver_pos)]);
        match engine.dispatch(&request) {
            DispatchOutcome::Assigned(result) => {
                let expected = crate::spatial::distance_km(client_location(), driver_pos);
                assert_eq!(result.distance_km, expected);
            }
            other => panic!("expected assignment, got {:?}", other),
        }
    }
}
