use crate::spatial::Coordinate;

/// A candidate driver annotated with the distance the ranking policy
/// computed for it. `distance_km` is the value reported to the caller on
/// assignment; policies must fill it from the same formula they rank with.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub driver_id: String,
    pub location: Coordinate,
    pub distance_km: f64,
}
