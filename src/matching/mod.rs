//! Profile-to-job match scoring.
//!
//! Given one [`CandidateProfile`] and N [`JobPosting`]s, [`MatchScorer`]
//! encodes the profile's three field texts once, encodes all 3N job field
//! texts in a single batch, combines per-field cosine similarities with the
//! experience-conditioned [`FieldWeights`], and remaps each weighted
//! similarity through [`boost`] into an integer score in [0, 100].
//!
//! # Ordering
//!
//! The encoding batch is laid out as (role, location, skills) per job, jobs
//! in input order, and sliced back at a fixed stride of three. Scores come
//! back in job order. Any reordering is a correctness bug, not a quality
//! tradeoff.

pub mod boost;
mod error;
mod scorer;
pub mod similarity;
pub mod types;


pub use boost::{BOOST_CEIL, BOOST_FLOOR, BOOST_THRESHOLD, boost};
pub use error::ScoringError;
pub use scorer::MatchScorer;
pub use similarity::{
    EXPERIENCE_KNOWN_WEIGHTS, EXPERIENCE_UNKNOWN_WEIGHTS, FieldWeights, cosine_similarity,
    experience_similarity, weighted_similarity,
};
pub use types::{CandidateProfile, JobPosting, JobVectorSet, ProfileVectorSet};
