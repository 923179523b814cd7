//! Resumatch scoring library (used by the search service and integration
//! tests).
//!
//! Matches one candidate profile against a batch of job postings and returns
//! a bounded, interpretable score in [0, 100] per job. The expensive step,
//! the sentence-embedding model, runs once per request over all field texts
//! rather than once per job.
//!
//! # Public API Surface
//!
//! ## Scoring
//! - [`MatchScorer`] - Batch orchestrator: preprocess once, score many
//! - [`CandidateProfile`], [`JobPosting`] - Boundary data model
//! - [`ProfileVectorSet`], [`JobVectorSet`] - Per-request vector sets
//! - [`FieldWeights`], [`boost`] - Weighted combination and display remap
//! - [`ScoringError`] - Result-typed inner path; the plain scoring methods
//!   substitute [`NEUTRAL_SCORE`] instead of propagating
//!
//! ## Embedding
//! - [`TextEncoder`], [`EncoderConfig`] - Bundled sentence encoder
//!   (model + deterministic stub backends)
//! - [`TextEmbedder`] - The seam any embedding backend can satisfy
//!
//! ## Extraction
//! - [`years_of_experience`] - Pattern-based enrichment of job postings
//!
//! ## Test/Mock Support
//! [`MockTextEmbedder`] is available behind `#[cfg(any(test, feature =
//! "mock"))]`.

pub mod constants;
pub mod embedding;
pub mod extraction;
pub mod matching;

pub use constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, DEFAULT_TRUNCATE_CHARS, EXPERIENCE_DECAY_YEARS,
    FIELDS_PER_ITEM, NEUTRAL_SCORE,
};
pub use embedding::{
    ENCODER_EMBEDDING_DIM, ENCODER_MAX_SEQ_LEN, ENCODER_TRUNCATE_CHARS, EncoderConfig,
    EncodingError, TextEmbedder, TextEncoder,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockTextEmbedder;
pub use extraction::years_of_experience;
pub use matching::{
    BOOST_CEIL, BOOST_FLOOR, BOOST_THRESHOLD, CandidateProfile, EXPERIENCE_KNOWN_WEIGHTS,
    EXPERIENCE_UNKNOWN_WEIGHTS, FieldWeights, JobPosting, JobVectorSet, MatchScorer,
    ProfileVectorSet, ScoringError, boost, cosine_similarity, experience_similarity,
    weighted_similarity,
};
