//! Text vectorization.
//!
//! - [`encoder`] provides the sentence encoder used by
//!   [`crate::matching::MatchScorer`].
//! - [`TextEmbedder`] is the seam the scorer consumes, so any backend that
//!   maps batch text to batch vectors can stand in for the bundled model.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Sentence encoder (model + stub backends).
pub mod encoder;
mod error;

#[cfg(any(test, feature = "mock"))]
mod mock;

pub use encoder::{
    ENCODER_EMBEDDING_DIM, ENCODER_MAX_SEQ_LEN, ENCODER_TRUNCATE_CHARS, EncoderConfig, TextEncoder,
};
pub use error::EncodingError;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockTextEmbedder;

/// Batch text-to-vector capability.
///
/// Implementations must return exactly one vector per input, in input order,
/// with a dimension fixed for the lifetime of the process. A failure is
/// terminal for the whole batch; there is no per-item error channel.
pub trait TextEmbedder: Send + Sync {
    /// Encodes a batch of texts into fixed-dimension vectors.
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EncodingError>;

    /// Output vector dimension.
    fn embedding_dim(&self) -> usize;
}
