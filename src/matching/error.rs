use thiserror::Error;

use crate::embedding::EncodingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    #[error("encoder returned {actual} vectors for {expected} inputs")]
    BatchShape { expected: usize, actual: usize },

    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
