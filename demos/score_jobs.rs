//! Basic batch-scoring flow over the stub encoder (no model files required).
//!
//! Point `RESUMATCH_MODEL_DIR` at a sentence-transformer export and swap
//! [`EncoderConfig::stub`] for [`EncoderConfig::from_env`] to score with the
//! real model.

use std::sync::Arc;

use resumatch::{
    CandidateProfile, EncoderConfig, JobPosting, MatchScorer, ScoringError, TextEncoder,
    years_of_experience,
};

fn posting(role: &str, location: &str, requirements: &[&str], description: &str) -> JobPosting {
    JobPosting {
        role: role.into(),
        location: location.into(),
        description: description.into(),
        requirements: requirements.iter().map(|s| s.to_string()).collect(),
        years_experience: years_of_experience(description),
        company: "Example Corp".into(),
        url: String::new(),
        salary: None,
        job_id: String::new(),
    }
}

fn main() -> Result<(), ScoringError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let encoder = TextEncoder::load(EncoderConfig::stub())?;
    let scorer = MatchScorer::new(Arc::new(encoder));

    let profile = CandidateProfile {
        role: "Backend Developer".into(),
        location: "Milan".into(),
        skills: vec!["Python".into(), "SQL".into()],
        years_experience: Some(5),
    };

    let jobs = vec![
        posting(
            "Backend Developer",
            "Milan",
            &["Python", "SQL"],
            "Backend team in Milan, 5+ years of experience required",
        ),
        posting(
            "Data Engineer",
            "Rome",
            &["Python", "Spark"],
            "Pipelines and warehousing",
        ),
        posting(
            "Graphic Designer",
            "Tokyo",
            &["Photoshop"],
            "Brand and campaign design",
        ),
    ];

    let vectors = scorer.preprocess(&profile)?;
    for (job, score) in jobs.iter().zip(scorer.score_batch(&vectors, &jobs)) {
        println!("{score:>3}  {} ({})", job.role, job.location);
    }

    Ok(())
}
