use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("embedding model not found in directory: {dir}")]
    ModelNotFound { dir: PathBuf },

    #[error("failed to load embedding model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("{device} device unavailable: {reason}")]
    DeviceUnavailable { device: String, reason: String },

    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid encoder configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for EncodingError {
    fn from(err: candle_core::Error) -> Self {
        EncodingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for EncodingError {
    fn from(err: std::io::Error) -> Self {
        EncodingError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
