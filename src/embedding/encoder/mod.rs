//! Sentence encoder (BERT-family safetensors + tokenizer).
//!
//! Use [`EncoderConfig::stub`] for tests/examples without model files.

/// Encoder configuration.
pub mod config;
pub(crate) mod model;


pub use config::{ENCODER_EMBEDDING_DIM, ENCODER_MAX_SEQ_LEN, ENCODER_TRUNCATE_CHARS, EncoderConfig};

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::embedding::TextEmbedder;
use crate::embedding::device::select_device;
use crate::embedding::error::EncodingError;

use model::BertSentenceEncoder;

enum EncoderBackend {
    Model {
        model: Arc<Mutex<BertSentenceEncoder>>,
        tokenizer: Arc<tokenizers::Tokenizer>,
    },
    Stub,
}

/// Order-preserving text-to-vector encoder (supports stub mode).
///
/// One instance is loaded at process startup and shared across requests; the
/// loaded model is serialized behind a mutex, so concurrent callers are safe.
pub struct TextEncoder {
    backend: EncoderBackend,
    config: EncoderConfig,
}

impl std::fmt::Debug for TextEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { .. } => "Model",
                    EncoderBackend::Stub => "Stub",
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .field("truncate_chars", &self.config.truncate_chars)
            .finish()
    }
}

impl TextEncoder {
    /// Loads the encoder from a config (stub mode is supported).
    pub fn load(config: EncoderConfig) -> Result<Self, EncodingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("TextEncoder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
            });
        }

        if !config.model_available() || !config.tokenizer_available() {
            return Err(EncodingError::ModelNotFound {
                dir: config.model_dir.clone(),
            });
        }

        let device = select_device()?;
        debug!(?device, "Selected compute device for sentence encoder");

        let tokenizer = tokenizers::Tokenizer::from_file(config.tokenizer_path()).map_err(|e| {
            EncodingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        let model = BertSentenceEncoder::load(&config.model_dir, &device).map_err(|e| {
            EncodingError::ModelLoadFailed {
                reason: format!("Failed to load sentence encoder: {}", e),
            }
        })?;

        if config.embedding_dim > model.hidden_size() {
            return Err(EncodingError::InvalidConfig {
                reason: format!(
                    "embedding_dim ({}) exceeds model hidden_size ({})",
                    config.embedding_dim,
                    model.hidden_size()
                ),
            });
        }

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            hidden_size = model.hidden_size(),
            "Sentence encoder loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model: Arc::new(Mutex::new(model)),
                tokenizer: Arc::new(tokenizer),
            },
            config,
        })
    }

    /// Generates an embedding for a single string.
    pub fn encode(&self, text: &str) -> Result<Vec<f32>, EncodingError> {
        let text = self.clip(text);
        match &self.backend {
            EncoderBackend::Model { model, tokenizer } => {
                self.encode_with_model(text, model, tokenizer)
            }
            EncoderBackend::Stub => Ok(self.encode_stub(text)),
        }
    }

    /// Generates embeddings for a batch of strings, one vector per input, in
    /// input order.
    pub fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EncodingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        // Sequential forward passes (tensor batching would need padding
        // plus mask-weighted pooling).
        texts.iter().map(|text| self.encode(text)).collect()
    }

    fn encode_with_model(
        &self,
        text: &str,
        model: &Arc<Mutex<BertSentenceEncoder>>,
        tokenizer: &tokenizers::Tokenizer,
    ) -> Result<Vec<f32>, EncodingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EncodingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let mut tokens: Vec<u32> = encoding.get_ids().to_vec();
        let mut type_ids: Vec<u32> = encoding.get_type_ids().to_vec();
        if tokens.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        if tokens.len() > self.config.max_seq_len {
            tokens.truncate(self.config.max_seq_len);
            type_ids.truncate(self.config.max_seq_len);
        }

        debug!(
            text_len = text.len(),
            token_count = tokens.len(),
            "Generating embedding (transformer forward pass)"
        );

        let embedding = model
            .lock()
            .encode_tokens(&tokens, &type_ids, self.config.embedding_dim)
            .map_err(|e| EncodingError::InferenceFailed {
                reason: format!("Transformer forward pass failed: {}", e),
            })?;

        Ok(normalize(embedding))
    }

    fn encode_stub(&self, text: &str) -> Vec<f32> {
        debug!(text_len = text.len(), "Generating stub embedding");
        hash_embedding(text, self.config.embedding_dim)
    }

    /// Applies the configured character budget on a char boundary.
    fn clip<'a>(&self, text: &'a str) -> &'a str {
        match self.config.truncate_chars {
            Some(budget) => match text.char_indices().nth(budget) {
                Some((idx, _)) => &text[..idx],
                None => text,
            },
            None => text,
        }
    }

    /// Returns the configured output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EncoderBackend::Model { .. })
    }

    /// Returns the encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}

impl TextEmbedder for TextEncoder {
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EncodingError> {
        TextEncoder::encode_batch(self, texts)
    }

    fn embedding_dim(&self) -> usize {
        TextEncoder::embedding_dim(self)
    }
}

/// Deterministic hash-seeded pseudo-embedding, L2-normalized.
///
/// Stands in for the model in stub/mock paths so similarity assertions are
/// exact without model files.
pub(crate) fn hash_embedding(text: &str, dim: usize) -> Vec<f32> {
    use std::hash::{DefaultHasher, Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    let seed = hasher.finish();

    let mut embedding = Vec::with_capacity(dim);
    let mut state = seed;

    for _ in 0..dim {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
        embedding.push(value);
    }

    normalize(embedding)
}

fn normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}
