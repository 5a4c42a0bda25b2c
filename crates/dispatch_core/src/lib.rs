pub mod engine;
pub mod matching;
pub mod request;
pub mod roster;
pub mod spatial;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
