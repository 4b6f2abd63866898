//! Batch signing of token files and pairwise reporting, as run by the `minwise` binary.
//!
//! Files are spread over worker threads pulling batches from a shared cursor. Results come back
//! in input order, can be folded into signatures resumed from a [`crate::fs::SignatureStore`],
//! and compared pairwise.

mod error;
mod pipeline;

pub use error::SigningError;
pub use pipeline::*;
