use thiserror::Error;

use crate::fs::FsError;
use crate::minhash::MinHashError;

#[derive(Debug, Error)]
pub enum SigningError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("cannot combine signature `{name}`")]
    Signature {
        name: String,
        #[source]
        source: MinHashError,
    },

    #[error("signature size must be positive")]
    ZeroSize,

    #[error("at least one signing thread is required")]
    NoThreads,

    #[error("signing thread panicked")]
    WorkerPanicked,
}
