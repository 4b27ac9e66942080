//! Summary analysis: a composed narrative plus similar cases and key phrases.

use rand::Rng;

use super::lexicon::{CASE_RESOLUTIONS, KEY_PHRASES};
use super::narrative::compose_summary;
use super::sampling::{pick, sample};
use crate::models::{SimilarCase, SummaryAnalysis};

const MIN_KEY_PHRASES: usize = 3;
const MAX_KEY_PHRASES: usize = 4;

pub fn analyze_summary<R: Rng + ?Sized>(rng: &mut R) -> SummaryAnalysis {
    let narrative = compose_summary(rng);

    let case_count = rng.gen_range(2..=4);
    let similar_cases = (0..case_count)
        .map(|_| SimilarCase {
            case_id: format!("CASE-{}", rng.gen_range(1000..=9999u16)),
            similarity: rng.gen_range(75..=95),
            resolution: pick(rng, CASE_RESOLUTIONS).to_string(),
        })
        .collect();

    let key_phrases = key_phrases(rng, &narrative.summary);

    SummaryAnalysis {
        call_summary: narrative.summary,
        primary_intent: narrative.intent,
        confidence_score: rng.gen_range(85..=99),
        urgency_level: narrative.urgency,
        sentiment: narrative.sentiment,
        similar_cases,
        key_phrases,
    }
}

/// Phrases with at least one word occurring in `summary`.
pub fn relevant_phrases(summary: &str) -> Vec<&'static str> {
    let lower = summary.to_lowercase();
    KEY_PHRASES
        .iter()
        .copied()
        .filter(|phrase| phrase.split_whitespace().any(|word| lower.contains(word)))
        .collect()
}

/// Relevant phrases, topped up with unrelated ones when fewer than three
/// match, then trimmed to at most four in random order.
pub fn key_phrases<R: Rng + ?Sized>(rng: &mut R, summary: &str) -> Vec<String> {
    let mut phrases = relevant_phrases(summary);

    if phrases.len() < MIN_KEY_PHRASES {
        let unrelated: Vec<&str> = KEY_PHRASES
            .iter()
            .copied()
            .filter(|p| !phrases.contains(p))
            .collect();
        phrases.extend(sample(rng, &unrelated, MIN_KEY_PHRASES));
    }

    sample(rng, &phrases, MAX_KEY_PHRASES)
        .into_iter()
        .map(str::to_string)
        .collect()
}
