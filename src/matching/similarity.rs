//! Per-field similarities and their weighted combination.

use crate::constants::EXPERIENCE_DECAY_YEARS;

use super::types::{JobVectorSet, ProfileVectorSet};

/// Weights applied to the per-field similarities.
///
/// Both constant sets sum to 1.0: when experience cannot be compared, its
/// share is reallocated onto role and location instead of silently dropping
/// a tenth of the score mass. Skills stay the dominant driver in both
/// regimes.
#[derive(Debug, Clone, Copy)]
pub struct FieldWeights {
    pub role: f32,
    pub skills: f32,
    pub location: f32,
    pub experience: f32,
}

/// Weights when both sides carry a years-of-experience value.
pub const EXPERIENCE_KNOWN_WEIGHTS: FieldWeights = FieldWeights {
    role: 0.25,
    skills: 0.50,
    location: 0.15,
    experience: 0.10,
};

/// Weights when either side's years-of-experience is unknown.
pub const EXPERIENCE_UNKNOWN_WEIGHTS: FieldWeights = FieldWeights {
    role: 0.30,
    skills: 0.50,
    location: 0.20,
    experience: 0.0,
};

impl FieldWeights {
    /// Selects the weight set for a profile/job pair.
    pub fn for_pair(profile_years: Option<u32>, job_years: Option<u32>) -> Self {
        if profile_years.is_some() && job_years.is_some() {
            EXPERIENCE_KNOWN_WEIGHTS
        } else {
            EXPERIENCE_UNKNOWN_WEIGHTS
        }
    }

    pub fn sum(&self) -> f32 {
        self.role + self.skills + self.location + self.experience
    }
}

/// Raw cosine similarity: dot product over the product of norms.
///
/// Returns 0.0 for empty, length-mismatched, or zero-norm inputs; negative
/// values pass through unclamped.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Linear decay of the years-of-experience gap: 1.0 at a zero gap, 0.0 from
/// ten years on, never negative. Unknown on either side compares as 0.0 (the
/// weight reallocation removes it from the sum).
#[inline]
pub fn experience_similarity(profile_years: Option<u32>, job_years: Option<u32>) -> f32 {
    match (profile_years, job_years) {
        (Some(profile), Some(job)) => {
            let gap = profile.abs_diff(job) as f32;
            (1.0 - gap / EXPERIENCE_DECAY_YEARS).max(0.0)
        }
        _ => 0.0,
    }
}

/// Combines per-field cosine similarities and the experience similarity
/// under the applicable weight set. Result is the pre-boost compatibility
/// signal.
pub fn weighted_similarity(profile: &ProfileVectorSet, job: &JobVectorSet) -> f32 {
    let weights = FieldWeights::for_pair(profile.years_experience, job.years_experience);

    let role = cosine_similarity(&profile.role, &job.role);
    let location = cosine_similarity(&profile.location, &job.location);
    let skills = cosine_similarity(&profile.skills, &job.skills);
    let experience = experience_similarity(profile.years_experience, job.years_experience);

    role * weights.role
        + skills * weights.skills
        + location * weights.location
        + experience * weights.experience
}
