use serde::{Deserialize, Serialize};

use crate::constants::FIELDS_PER_ITEM;

/// Candidate profile as extracted upstream from a CV.
///
/// Immutable for the duration of one search request. `skills` keep their
/// insertion order; matching ignores the order but the join-then-embed text
/// preserves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub role: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub years_experience: Option<u32>,
}

/// One job posting as returned by the upstream job source.
///
/// `requirements` and `years_experience` are derived externally (LLM and
/// pattern extraction respectively) and may be empty/null. The identity
/// fields are carried through untouched; scoring never reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub role: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub years_experience: Option<u32>,

    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub job_id: String,
}

/// Builds the three normalized field texts in the fixed encoding order:
/// role, location, skills (lower-cased, skills joined by a single space).
fn field_texts(role: &str, location: &str, skills: &[String]) -> [String; FIELDS_PER_ITEM] {
    [
        format!("Role: {}.", role.to_lowercase()),
        format!("Location: {}.", location.to_lowercase()),
        format!("Skills: {}.", skills.join(" ").to_lowercase()),
    ]
}

impl CandidateProfile {
    pub(crate) fn encoding_texts(&self) -> [String; FIELDS_PER_ITEM] {
        field_texts(&self.role, &self.location, &self.skills)
    }
}

impl JobPosting {
    pub(crate) fn encoding_texts(&self) -> [String; FIELDS_PER_ITEM] {
        field_texts(&self.role, &self.location, &self.requirements)
    }
}

/// Embedding vectors for one candidate profile, derived once per search
/// request and reused for every job scored against it.
#[derive(Debug, Clone)]
pub struct ProfileVectorSet {
    pub role: Vec<f32>,
    pub location: Vec<f32>,
    pub skills: Vec<f32>,
    pub years_experience: Option<u32>,
}

/// Embedding vectors for one job posting; discarded after its score is
/// computed.
#[derive(Debug, Clone)]
pub struct JobVectorSet {
    pub role: Vec<f32>,
    pub location: Vec<f32>,
    pub skills: Vec<f32>,
    pub years_experience: Option<u32>,
}
