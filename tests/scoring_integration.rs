//! End-to-end scoring flows over the public API, using the stub encoder and
//! the mock embedder (no model files required).

use std::sync::Arc;

use resumatch::{
    CandidateProfile, EncoderConfig, JobPosting, MatchScorer, MockTextEmbedder, NEUTRAL_SCORE,
    TextEncoder, years_of_experience,
};

fn stub_scorer() -> MatchScorer<TextEncoder> {
    let encoder = TextEncoder::load(EncoderConfig::stub()).expect("load stub encoder");
    MatchScorer::new(Arc::new(encoder))
}

fn backend_profile() -> CandidateProfile {
    CandidateProfile {
        role: "Backend Developer".into(),
        location: "Milan".into(),
        skills: vec!["Python".into(), "SQL".into()],
        years_experience: Some(5),
    }
}

fn job(role: &str, location: &str, requirements: &[&str], years: Option<u32>) -> JobPosting {
    JobPosting {
        role: role.into(),
        location: location.into(),
        description: format!("{} position in {}", role, location),
        requirements: requirements.iter().map(|s| s.to_string()).collect(),
        years_experience: years,
        company: "Example Corp".into(),
        url: "https://jobs.example/posting".into(),
        salary: None,
        job_id: "posting-1".into(),
    }
}

#[test]
fn near_identical_posting_lands_in_the_nineties() {
    let scorer = stub_scorer();
    let profile = backend_profile();

    let posting = job("Backend Developer", "Milan", &["Python", "SQL"], Some(5));
    let scores = scorer.score_request(&profile, &[posting]);

    assert_eq!(scores.len(), 1);
    assert!(scores[0] >= 90, "expected a boosted score, got {}", scores[0]);
}

#[test]
fn unrelated_posting_scores_well_under_fifty() {
    let scorer = stub_scorer();
    let profile = backend_profile();

    let posting = job("Graphic Designer", "Tokyo", &["Photoshop"], Some(0));
    let scores = scorer.score_request(&profile, &[posting]);

    assert!(scores[0] < 50, "expected an unboosted low score, got {}", scores[0]);
}

#[test]
fn batch_scores_come_back_in_job_order() {
    let scorer = stub_scorer();
    let profile = backend_profile();
    let vectors = scorer.preprocess(&profile).expect("preprocess");

    let jobs = vec![
        job("Backend Developer", "Milan", &["Python", "SQL"], Some(5)),
        job("Graphic Designer", "Tokyo", &["Photoshop"], Some(0)),
        job("Data Engineer", "Rome", &["Python", "Spark"], None),
        job("Backend Developer", "Milan", &["Python", "SQL"], Some(5)),
    ];

    let scores = scorer.score_batch(&vectors, &jobs);

    assert_eq!(scores.len(), jobs.len());
    assert_eq!(scores[0], scores[3], "identical postings must tie");
    for (posting, score) in jobs.iter().zip(&scores) {
        assert_eq!(scorer.score_one(&vectors, posting), *score);
        assert!(*score <= 100);
    }
}

#[test]
fn profile_is_encoded_once_and_reused_across_the_batch() {
    let scorer = stub_scorer();
    let profile = backend_profile();

    let vectors = scorer.preprocess(&profile).expect("preprocess");
    let posting = job("Backend Developer", "Milan", &["Python", "SQL"], Some(5));

    let first = scorer.score_batch(&vectors, std::slice::from_ref(&posting));
    let second = scorer.score_batch(&vectors, std::slice::from_ref(&posting));
    assert_eq!(first, second, "a cached profile must score stably");
}

#[test]
fn encoder_outage_degrades_the_whole_request_to_neutral() {
    let scorer = MatchScorer::new(Arc::new(MockTextEmbedder::failing(128)));
    let profile = backend_profile();

    let jobs = vec![
        job("Backend Developer", "Milan", &["Python"], Some(5)),
        job("Data Engineer", "Rome", &["Spark"], None),
        job("Graphic Designer", "Tokyo", &["Photoshop"], Some(0)),
    ];

    let scores = scorer.score_request(&profile, &jobs);
    assert_eq!(scores, vec![NEUTRAL_SCORE; 3]);
}

#[test]
fn one_bad_job_in_five_keeps_the_other_four_intact() {
    let dim = 128;
    let clean = MatchScorer::new(Arc::new(MockTextEmbedder::new(dim)));
    let poisoned = MatchScorer::new(Arc::new(MockTextEmbedder::malformed_on(dim, "poison")));

    let profile = backend_profile();
    let vectors = clean.preprocess(&profile).expect("preprocess");

    let mut jobs = vec![
        job("Backend Developer", "Milan", &["Python", "SQL"], Some(5)),
        job("Data Engineer", "Rome", &["Python", "Spark"], None),
        job("Frontend Developer", "Berlin", &["TypeScript"], Some(3)),
        job("Graphic Designer", "Tokyo", &["Photoshop"], Some(0)),
        job("DevOps Engineer", "Madrid", &["Kubernetes"], Some(4)),
    ];
    jobs[1].role = "Poison Engineer".into();

    let baseline = clean.score_batch(&vectors, &jobs);
    let degraded = poisoned.score_batch(&vectors, &jobs);

    assert_eq!(degraded.len(), 5);
    assert_eq!(degraded[1], NEUTRAL_SCORE);
    for i in [0, 2, 3, 4] {
        assert_eq!(degraded[i], baseline[i], "job {} must be unaffected", i);
    }
}

#[test]
fn extracted_years_flow_into_the_weighting() {
    let scorer = stub_scorer();
    let profile = backend_profile();
    let vectors = scorer.preprocess(&profile).expect("preprocess");

    let description = "Backend team in Milan, 5+ years of experience with Python required";
    let mut posting = job("Backend Developer", "Milan", &["Python", "SQL"], None);
    posting.years_experience = years_of_experience(description);
    assert_eq!(posting.years_experience, Some(5));

    // With the derived years present the zero-gap experience term joins the
    // sum under the 0.25/0.50/0.15/0.10 weights; on otherwise-identical
    // texts that keeps the score at the boost ceiling.
    assert_eq!(scorer.score_one(&vectors, &posting), 98);
}

#[test]
fn job_source_payloads_deserialize_with_missing_fields() {
    let payload = r#"
        {
            "role": "Backend Developer",
            "location": "Milan",
            "description": "Great team",
            "company": "Example Corp",
            "url": "https://jobs.example/42",
            "job_id": "42"
        }
    "#;

    let posting: JobPosting = serde_json::from_str(payload).expect("deserialize posting");
    assert!(posting.requirements.is_empty());
    assert_eq!(posting.years_experience, None);
    assert_eq!(posting.salary, None);

    let scorer = stub_scorer();
    let vectors = scorer
        .preprocess(&backend_profile())
        .expect("preprocess");
    let score = scorer.score_one(&vectors, &posting);
    assert!(score <= 100);
}
