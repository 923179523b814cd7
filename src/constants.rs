//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary values from these primaries to avoid drift. The
//! embedding dimension is fixed for the lifetime of the process; modules that
//! accept vectors at runtime validate against the encoder's configured value
//! at their boundary.

/// Output dimension of the default sentence-embedding model (mpnet-class).
pub const DEFAULT_EMBEDDING_DIM: usize = 768;

/// Token budget applied by the tokenizer before inference.
pub const DEFAULT_MAX_SEQ_LEN: usize = 384;

/// Character budget applied to each field text before encoding.
///
/// Encoding cost grows with input length while the role/location/skills
/// fields carry their signal up front, so inputs are cut here by default.
/// Configurable (and disablable) via
/// [`EncoderConfig::truncate_chars`](crate::embedding::EncoderConfig).
pub const DEFAULT_TRUNCATE_CHARS: usize = 128;

/// Number of encoded text fields per profile or job: role, location, skills.
pub const FIELDS_PER_ITEM: usize = 3;

/// Score substituted when a scoring computation fails: "unknown", not a
/// verdict in either direction.
pub const NEUTRAL_SCORE: u8 = 50;

/// Years-of-experience gap at which experience similarity reaches zero.
pub const EXPERIENCE_DECAY_YEARS: f32 = 10.0;
