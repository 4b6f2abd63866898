use thiserror::Error;

/// Errors raised when two signatures cannot be combined.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MinHashError {
    /// The signatures being compared or merged have different lengths.
    #[error("signature sizes do not match (expected {expected}, found {found})")]
    SignatureSizeMismatch { expected: usize, found: usize },
}
