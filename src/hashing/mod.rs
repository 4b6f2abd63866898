//! Two-output hash functions feeding the MinHash engine.
//!
//! The engine never hashes with a fixed algorithm. It is handed a [`PairHasher`] at construction
//! and calls it exactly once per pushed element. This module defines that capability and ships
//! the providers the `minwise` binary can select by name.

mod pair_hasher;
mod providers;

pub use pair_hasher::PairHasher;
pub use providers::*;
