//! File system I/O for the `minwise` binary.
//!
//! Token files are plain UTF-8 text split on whitespace. Signatures are persisted as a JSON
//! [`SignatureStore`]; the engine itself only exposes the raw `u64` slots.

mod error;
mod signature_store;
mod tokens;

pub use error::FsError;
pub use signature_store::*;
pub use tokens::load_tokens;
