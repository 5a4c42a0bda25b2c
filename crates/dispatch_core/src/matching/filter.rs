use crate::roster::DriverSnapshot;

/// Reduce the full roster to dispatch-eligible candidates: available drivers
/// with an in-range location. The filter is stable: surviving entries keep
/// their input order, which later acts as the deterministic tie-break seed
/// for ranking. Trip details are never consulted here.
pub fn available_candidates(drivers: &[DriverSnapshot]) -> Vec<DriverSnapshot> {
    drivers
        .iter()
        .filter(|driver| driver.is_available && driver.location.is_in_range())
        .cloned()
        .collect()
}
