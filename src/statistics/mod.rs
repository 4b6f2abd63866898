//! Ingestion counters for signature building.
//!
//! Workers keep a local [`Stats`] and fold them together once their batch is done.

mod stats;
pub use stats::*;
