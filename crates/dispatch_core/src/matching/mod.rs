pub mod algorithm;
pub mod closest;
pub mod cost_based;
pub mod filter;
pub mod types;

pub use algorithm::RankingPolicy;
pub use closest::ClosestDriver;
pub use cost_based::EtaWeighted;
pub use filter::available_candidates;
pub use types::RankedCandidate;
