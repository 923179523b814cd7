//! Pattern-based derivation over free-text job descriptions.
//!
//! Upstream enrichment for
//! [`JobPosting::years_experience`](crate::matching::JobPosting): the job
//! source returns prose, and the required years are pulled out with a small
//! pattern set before scoring.

use regex::Regex;
use std::sync::OnceLock;

fn experience_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"(\d+)\+?\s*years?\s*(?:of)?\s*experience",
            r"experience\s*(?:of|:)?\s*(\d+)\+?\s*years?",
            r"at\s*least\s*(\d+)\s*years?\s*(?:of)?\s*experience",
            r"minimum\s*(?:of)?\s*(\d+)\s*years?\s*experience",
            r"(\d+)\+?\s*anni\s*(?:di)?\s*esperienza",
            r"esperienza\s*(?:di|:)?\s*(\d+)\+?\s*anni",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("static experience pattern"))
        .collect()
    })
}

/// Extracts a years-of-experience requirement from a job description.
///
/// Matches English and Italian phrasings, case-insensitively, first match
/// wins. A missing description counts as an explicit zero (the posting said
/// nothing, which the job source treats as entry-level); prose with no
/// recognizable requirement is `None`.
pub fn years_of_experience(description: &str) -> Option<u32> {
    if description.is_empty() {
        return Some(0);
    }

    let description = description.to_lowercase();

    for pattern in experience_patterns() {
        if let Some(captures) = pattern.captures(&description) {
            if let Ok(years) = captures[1].parse::<u32>() {
                return Some(years);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_english_phrasings() {
        assert_eq!(years_of_experience("5+ years of experience with Rust"), Some(5));
        assert_eq!(years_of_experience("Experience of 3 years required"), Some(3));
        assert_eq!(years_of_experience("at least 7 years experience"), Some(7));
        assert_eq!(years_of_experience("minimum of 2 years experience"), Some(2));
    }

    #[test]
    fn extracts_italian_phrasings() {
        assert_eq!(years_of_experience("Richiesti 4 anni di esperienza"), Some(4));
        assert_eq!(years_of_experience("esperienza di 6 anni"), Some(6));
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(years_of_experience("10 YEARS OF EXPERIENCE"), Some(10));
    }

    #[test]
    fn first_pattern_wins() {
        let text = "3 years experience required, ideally experience of 8 years";
        assert_eq!(years_of_experience(text), Some(3));
    }

    #[test]
    fn empty_description_is_explicit_zero() {
        assert_eq!(years_of_experience(""), Some(0));
    }

    #[test]
    fn prose_without_requirement_is_unknown() {
        assert_eq!(years_of_experience("We ship fast and value ownership."), None);
        assert_eq!(years_of_experience("years of fun"), None);
    }

    #[test]
    fn absurd_numbers_do_not_panic() {
        assert_eq!(
            years_of_experience("99999999999999999999 years of experience"),
            None
        );
    }
}
