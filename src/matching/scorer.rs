use std::sync::Arc;

use tracing::{debug, warn};

use crate::constants::{FIELDS_PER_ITEM, NEUTRAL_SCORE};
use crate::embedding::TextEmbedder;

use super::boost::boost;
use super::error::ScoringError;
use super::similarity::weighted_similarity;
use super::types::{CandidateProfile, JobPosting, JobVectorSet, ProfileVectorSet};

/// Scores a candidate profile against batches of job postings.
///
/// Holds the process-wide encoder as an injected dependency; the scorer
/// itself is stateless per invocation, so one instance serves concurrent
/// requests.
///
/// The `try_*` methods surface [`ScoringError`]s; the plain methods apply
/// the fallback policy: on any whole-batch failure every affected job gets
/// [`NEUTRAL_SCORE`], logged and never propagated, because a degraded result
/// beats failing the search.
pub struct MatchScorer<E> {
    encoder: Arc<E>,
}

impl<E> std::fmt::Debug for MatchScorer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchScorer").finish_non_exhaustive()
    }
}

impl<E: TextEmbedder> MatchScorer<E> {
    pub fn new(encoder: Arc<E>) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &Arc<E> {
        &self.encoder
    }

    /// Encodes the profile's three field texts in one batch.
    ///
    /// Call this once per search request and reuse the result for every job;
    /// re-encoding the profile per job repeats identical model work.
    pub fn preprocess(&self, profile: &CandidateProfile) -> Result<ProfileVectorSet, ScoringError> {
        let texts = profile.encoding_texts();
        let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();

        let vectors = self.encoder.encode_batch(&text_refs)?;
        let [role, location, skills]: [Vec<f32>; FIELDS_PER_ITEM] =
            vectors
                .try_into()
                .map_err(|v: Vec<Vec<f32>>| ScoringError::BatchShape {
                    expected: FIELDS_PER_ITEM,
                    actual: v.len(),
                })?;

        debug!(
            role = %profile.role,
            skills = profile.skills.len(),
            "Profile vectors prepared"
        );

        Ok(ProfileVectorSet {
            role,
            location,
            skills,
            years_experience: profile.years_experience,
        })
    }

    /// Scores every job against the profile vectors, preserving job order.
    ///
    /// All `3 × jobs.len()` field texts go through the encoder in a single
    /// batch; the returned vectors are sliced back per job at a fixed stride
    /// of three. A job whose vectors come back malformed is scored
    /// [`NEUTRAL_SCORE`] without aborting the rest of the batch.
    pub fn try_score_batch(
        &self,
        profile_vectors: &ProfileVectorSet,
        jobs: &[JobPosting],
    ) -> Result<Vec<u8>, ScoringError> {
        if jobs.is_empty() {
            return Ok(vec![]);
        }

        let texts: Vec<String> = jobs.iter().flat_map(JobPosting::encoding_texts).collect();
        let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();

        let mut vectors = self.encoder.encode_batch(&text_refs)?;
        if vectors.len() != texts.len() {
            return Err(ScoringError::BatchShape {
                expected: texts.len(),
                actual: vectors.len(),
            });
        }

        let mut scores = Vec::with_capacity(jobs.len());
        for (job, chunk) in jobs.iter().zip(vectors.chunks_exact_mut(FIELDS_PER_ITEM)) {
            let job_vectors = JobVectorSet {
                role: std::mem::take(&mut chunk[0]),
                location: std::mem::take(&mut chunk[1]),
                skills: std::mem::take(&mut chunk[2]),
                years_experience: job.years_experience,
            };

            match self.score_vectors(profile_vectors, &job_vectors) {
                Ok(score) => {
                    debug!(role = %job.role, score, "Job scored");
                    scores.push(score);
                }
                Err(e) => {
                    warn!(
                        role = %job.role,
                        error = %e,
                        "Job scoring failed, substituting neutral score"
                    );
                    scores.push(NEUTRAL_SCORE);
                }
            }
        }

        Ok(scores)
    }

    /// [`try_score_batch`](Self::try_score_batch) with the batch-boundary
    /// fallback applied: any whole-batch failure yields `NEUTRAL_SCORE` for
    /// every job.
    pub fn score_batch(&self, profile_vectors: &ProfileVectorSet, jobs: &[JobPosting]) -> Vec<u8> {
        match self.try_score_batch(profile_vectors, jobs) {
            Ok(scores) => scores,
            Err(e) => {
                warn!(
                    job_count = jobs.len(),
                    error = %e,
                    "Batch scoring failed, substituting neutral scores"
                );
                vec![NEUTRAL_SCORE; jobs.len()]
            }
        }
    }

    /// Scores a single job; equivalent to a one-element batch.
    pub fn try_score_one(
        &self,
        profile_vectors: &ProfileVectorSet,
        job: &JobPosting,
    ) -> Result<u8, ScoringError> {
        let scores = self.try_score_batch(profile_vectors, std::slice::from_ref(job))?;
        Ok(scores.into_iter().next().unwrap_or(NEUTRAL_SCORE))
    }

    /// Single-job variant of [`score_batch`](Self::score_batch).
    pub fn score_one(&self, profile_vectors: &ProfileVectorSet, job: &JobPosting) -> u8 {
        self.score_batch(profile_vectors, std::slice::from_ref(job))
            .into_iter()
            .next()
            .unwrap_or(NEUTRAL_SCORE)
    }

    /// Full request flow: preprocess the profile once, then score the batch.
    ///
    /// A preprocessing failure degrades the entire request to neutral scores
    /// rather than surfacing an error.
    pub fn score_request(&self, profile: &CandidateProfile, jobs: &[JobPosting]) -> Vec<u8> {
        match self.preprocess(profile) {
            Ok(profile_vectors) => self.score_batch(&profile_vectors, jobs),
            Err(e) => {
                warn!(
                    job_count = jobs.len(),
                    error = %e,
                    "Profile preprocessing failed, substituting neutral scores"
                );
                vec![NEUTRAL_SCORE; jobs.len()]
            }
        }
    }

    fn score_vectors(
        &self,
        profile_vectors: &ProfileVectorSet,
        job_vectors: &JobVectorSet,
    ) -> Result<u8, ScoringError> {
        let expected = self.encoder.embedding_dim();
        for actual in [
            job_vectors.role.len(),
            job_vectors.location.len(),
            job_vectors.skills.len(),
        ] {
            if actual != expected {
                return Err(ScoringError::DimensionMismatch { expected, actual });
            }
        }

        Ok(boost(weighted_similarity(profile_vectors, job_vectors)))
    }
}
