use crate::roster::DriverSnapshot;
use crate::spatial::Coordinate;

use super::types::RankedCandidate;

/// Trait for ranking policies that order dispatch candidates for a client.
///
/// A policy decides which eligible driver should be assigned to a trip
/// request. Policies must be deterministic: identical inputs produce an
/// identical ordering, with ties resolved by candidate input order.
///
/// # Examples
///
/// ```rust
/// use dispatch_core::matching::{ClosestDriver, RankingPolicy};
/// use dispatch_core::roster::DriverSnapshot;
/// use dispatch_core::spatial::Coordinate;
///
/// let policy = ClosestDriver;
/// let ranked = policy.rank(
///     Coordinate::new(-12.045, -77.03),
///     &[DriverSnapshot::new("D1", Coordinate::new(-12.04, -77.03), true)],
/// );
/// assert_eq!(ranked[0].driver_id, "D1");
/// ```
pub trait RankingPolicy: Send + Sync {
    /// Rank candidates for the given client location, best first.
    ///
    /// `candidates` has already passed availability filtering; the policy
    /// only orders it. Each returned entry carries the haversine distance
    /// from the client to that driver. An empty candidate slice yields an
    /// empty ranking.
    fn rank(&self, client: Coordinate, candidates: &[DriverSnapshot]) -> Vec<RankedCandidate>;

    /// Human-readable justification for assigning the winning candidate.
    ///
    /// Policies override this to explain their own selection criteria; the
    /// default wording only states the distance.
    fn justification(&self, winner: &RankedCandidate) -> String {
        format!(
            "Selected driver {} at {:.2} km from the client.",
            winner.driver_id, winner.distance_km
        )
    }
}
