//! Mock embedder for scorer tests (deterministic vectors + failure knobs).

use super::TextEmbedder;
use super::encoder::hash_embedding;
use super::error::EncodingError;

/// Deterministic [`TextEmbedder`] with configurable failure behavior.
///
/// By default behaves like the stub backend. `failing()` makes every batch
/// call error, exercising the whole-batch fallback. `malformed_on(marker)`
/// returns a wrong-dimension vector for any text containing `marker`,
/// exercising the per-job fallback without failing the batch.
#[derive(Debug, Clone)]
pub struct MockTextEmbedder {
    dim: usize,
    fail_all: bool,
    malformed_marker: Option<String>,
}

impl MockTextEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            fail_all: false,
            malformed_marker: None,
        }
    }

    /// Every `encode_batch` call returns an inference error.
    pub fn failing(dim: usize) -> Self {
        Self {
            fail_all: true,
            ..Self::new(dim)
        }
    }

    /// Texts containing `marker` get a vector of the wrong dimension.
    pub fn malformed_on(dim: usize, marker: impl Into<String>) -> Self {
        Self {
            malformed_marker: Some(marker.into()),
            ..Self::new(dim)
        }
    }
}

impl TextEmbedder for MockTextEmbedder {
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EncodingError> {
        if self.fail_all {
            return Err(EncodingError::InferenceFailed {
                reason: "mock embedder configured to fail".to_string(),
            });
        }

        Ok(texts
            .iter()
            .map(|text| {
                let dim = match &self.malformed_marker {
                    Some(marker) if text.contains(marker.as_str()) => self.dim + 1,
                    _ => self.dim,
                };
                hash_embedding(text, dim)
            })
            .collect())
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }
}
