use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::hashing::HashKind;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed signature store {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Signatures need at least one slot.
    #[error("signature store declares a size of 0 slots")]
    ZeroSize,

    /// A stored entry does not have the number of slots the store declares.
    #[error("signature `{name}` has {found} slots, store declares {expected}")]
    SizeMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    /// The store was built for a different signature size or hash function than requested.
    #[error("store holds {found_size}-slot {found_hash} signatures, expected {expected_size}-slot {expected_hash}")]
    Incompatible {
        expected_size: usize,
        expected_hash: HashKind,
        found_size: usize,
        found_hash: HashKind,
    },
}
