use std::cmp::Ordering;

use crate::roster::DriverSnapshot;
use crate::spatial::{distance_km, Coordinate};

use super::algorithm::RankingPolicy;
use super::closest::DISTANCE_TIE_EPSILON_KM;
use super::types::RankedCandidate;

/// Average pickup speed for ETA estimation (km/h).
const AVG_SPEED_KMH: f64 = 40.0;

/// ETA-weighted ranking: order candidates by distance plus a weighted
/// estimate of the pickup ETA.
///
/// A second deterministic policy exercising the `RankingPolicy` seam. The
/// cost of a candidate is `distance_km + eta_secs * eta_weight`; lower cost
/// ranks first, with the same tolerance tie-break as `ClosestDriver`. Richer
/// soft factors (traffic, driver rating) would slot in here as further
/// policies once snapshots carry the data for them.
#[derive(Debug)]
pub struct EtaWeighted {
    /// Weight for the ETA term in the cost. Higher values penalize slow
    /// pickups more.
    pub eta_weight: f64,
}

impl EtaWeighted {
    pub fn new(eta_weight: f64) -> Self {
        Self { eta_weight }
    }

    /// Estimate pickup ETA in milliseconds based on distance. 1 second floor.
    fn estimate_pickup_eta_ms(&self, distance_km: f64) -> u64 {
        if distance_km <= 0.0 {
            return 1_000;
        }
        let eta_hours = distance_km / AVG_SPEED_KMH;
        (eta_hours * 3600.0 * 1000.0).max(1000.0) as u64
    }

    /// Cost of a candidate; lower is better.
    fn pairing_cost(&self, pickup_distance_km: f64, pickup_eta_ms: u64) -> f64 {
        pickup_distance_km + (pickup_eta_ms as f64 / 1000.0) * self.eta_weight
    }
}

impl Default for EtaWeighted {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl RankingPolicy for EtaWeighted {
    fn rank(&self, client: Coordinate, candidates: &[DriverSnapshot]) -> Vec<RankedCandidate> {
        let mut scored: Vec<(RankedCandidate, f64)> = candidates
            .iter()
            .map(|driver| {
                let pickup_distance_km = distance_km(client, driver.location);
                let pickup_eta_ms = self.estimate_pickup_eta_ms(pickup_distance_km);
                let cost = self.pairing_cost(pickup_distance_km, pickup_eta_ms);
                (
                    RankedCandidate {
                        driver_id: driver.driver_id.clone(),
                        location: driver.location,
                        distance_km: pickup_distance_km,
                    },
                    cost,
                )
            })
            .collect();
        scored.sort_by(|(_, a), (_, b)| {
            if (a - b).abs() <= DISTANCE_TIE_EPSILON_KM {
                Ordering::Equal
            } else {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
        });
        scored.into_iter().map(|(candidate, _)| candidate).collect()
    }

    fn justification(&self, winner: &RankedCandidate) -> String {
        let eta_secs = self.estimate_pickup_eta_ms(winner.distance_km) / 1000;
        format!(
            "Selected for the best pickup estimate: {:.2} km away, about {} s to reach the client.",
            winner.distance_km, eta_secs
        )
    }
}
