use std::cmp::Ordering;

use crate::roster::DriverSnapshot;
use crate::spatial::{distance_km, Coordinate};

use super::algorithm::RankingPolicy;
use super::types::RankedCandidate;

/// Distances within this tolerance are treated as equal, so equidistant
/// candidates fall back to input order under the stable sort.
pub const DISTANCE_TIE_EPSILON_KM: f64 = 1e-9;

/// Closest-driver ranking: order candidates by ascending haversine distance
/// to the client.
///
/// Ties (within `DISTANCE_TIE_EPSILON_KM`) keep the candidates' filtered
/// input order, which makes the whole pipeline reproducible for identical
/// inputs. Trip details do not influence the ordering.
///
/// Time complexity: O(n log n) in the number of candidates.
#[derive(Debug, Default)]
pub struct ClosestDriver;

impl RankingPolicy for ClosestDriver {
    fn rank(&self, client: Coordinate, candidates: &[DriverSnapshot]) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .map(|driver| RankedCandidate {
                driver_id: driver.driver_id.clone(),
                location: driver.location,
                distance_km: distance_km(client, driver.location),
            })
            .collect();
        // Stable sort; cmp_distances reports Equal inside the tolerance.
        ranked.sort_by(|a, b| cmp_distances(a.distance_km, b.distance_km));
        ranked
    }

    fn justification(&self, winner: &RankedCandidate) -> String {
        format!(
            "Selected because this driver is the closest available driver to the client, at {:.2} km.",
            winner.distance_km
        )
    }
}

fn cmp_distances(a: f64, b: f64) -> Ordering {
    if (a - b).abs() <= DISTANCE_TIE_EPSILON_KM {
        Ordering::Equal
    } else {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}
