//! Service layer: aggregation, display derivations and the refresh timer.
//!
//! The aggregator orchestrates the upstream clients; the classifier and
//! advice mapper are pure derivations invoked at presentation time, never
//! stored on a reading.

pub mod advice;
pub mod aggregator;
pub mod classify;
pub mod refresh;

pub use advice::advice_for;
pub use aggregator::Aggregator;
pub use classify::{band_for, classify, classify_pollutant, AirLevel, Classification};
pub use refresh::{spawn_auto_refresh, AutoRefresh};
