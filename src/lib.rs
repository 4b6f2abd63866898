//! `minwise`: MinWise hashing (MinHash) signatures for Jaccard similarity estimation.
//!
//! The [`minhash::MinHash`] engine is the whole algorithm. [`hashing`] supplies the two-output
//! hash functions it is bound to. [`signing`], [`fs`] and [`statistics`] back the `minwise` binary.

pub mod fs;
pub mod hashing;
pub mod minhash;
pub mod signing;
pub mod statistics;
