use std::path::PathBuf;

use crate::embedding::error::EncodingError;

/// Default encoder output dimension.
pub const ENCODER_EMBEDDING_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Default encoder max sequence length.
pub const ENCODER_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

/// Default character budget applied to inputs before encoding.
pub const ENCODER_TRUNCATE_CHARS: usize = crate::constants::DEFAULT_TRUNCATE_CHARS;

#[derive(Debug, Clone)]
/// Configuration for [`TextEncoder`](super::TextEncoder).
pub struct EncoderConfig {
    /// Directory holding `config.json`, `model.safetensors` and
    /// `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens to consider per input.
    pub max_seq_len: usize,
    /// Output embedding dimension.
    pub embedding_dim: usize,
    /// Character budget applied to each input text before tokenization.
    /// `None` disables truncation.
    pub truncate_chars: Option<usize>,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: ENCODER_MAX_SEQ_LEN,
            embedding_dim: ENCODER_EMBEDDING_DIM,
            truncate_chars: Some(ENCODER_TRUNCATE_CHARS),
            testing_stub: false,
        }
    }
}

impl EncoderConfig {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_DIR: &'static str = "RESUMATCH_MODEL_DIR";
    /// Env var overriding the character budget (`0` disables truncation).
    pub const ENV_TRUNCATE_CHARS: &'static str = "RESUMATCH_TRUNCATE_CHARS";

    /// Loads config from environment variables (a missing model dir becomes
    /// an empty path).
    pub fn from_env() -> Result<Self, EncodingError> {
        let model_dir = std::env::var(Self::ENV_MODEL_DIR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_default();

        let truncate_chars = match std::env::var(Self::ENV_TRUNCATE_CHARS) {
            Ok(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    Some(ENCODER_TRUNCATE_CHARS)
                } else {
                    let n: usize =
                        raw.parse().map_err(|_| EncodingError::InvalidConfig {
                            reason: format!(
                                "{} must be a non-negative integer, got {:?}",
                                Self::ENV_TRUNCATE_CHARS,
                                raw
                            ),
                        })?;
                    (n > 0).then_some(n)
                }
            }
            Err(_) => Some(ENCODER_TRUNCATE_CHARS),
        };

        Ok(Self {
            model_dir,
            truncate_chars,
            ..Default::default()
        })
    }

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic
    /// embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Path to the model's `config.json`.
    pub fn config_path(&self) -> PathBuf {
        self.model_dir.join("config.json")
    }

    /// Path to the model weights.
    pub fn weights_path(&self) -> PathBuf {
        self.model_dir.join("model.safetensors")
    }

    /// Path to `tokenizer.json`.
    pub fn tokenizer_path(&self) -> PathBuf {
        self.model_dir.join("tokenizer.json")
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EncodingError> {
        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EncodingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EncodingError::ModelNotFound {
                dir: self.model_dir.clone(),
            });
        }

        Ok(())
    }

    /// Returns `true` if the weights and config files exist.
    pub fn model_available(&self) -> bool {
        !self.model_dir.as_os_str().is_empty()
            && self.weights_path().exists()
            && self.config_path().exists()
    }

    /// Returns `true` if the tokenizer file exists.
    pub fn tokenizer_available(&self) -> bool {
        !self.model_dir.as_os_str().is_empty() && self.tokenizer_path().exists()
    }
}
