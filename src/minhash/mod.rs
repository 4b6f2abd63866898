//! MinWise hashing signatures for Jaccard similarity estimation.
//!
//! A [`MinHash`] keeps, for each of `size` simulated hash functions, the smallest hash value
//! seen so far. Two signatures built with the same hasher and size agree on a slot with
//! probability equal to the Jaccard similarity of the underlying sets, so the fraction of
//! agreeing slots estimates it.

mod engine;
mod error;

pub use engine::MinHash;
pub use error::MinHashError;
