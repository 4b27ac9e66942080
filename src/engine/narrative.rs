//! Narrative composer: free-text call summaries and their keyword labels.

use rand::Rng;

use super::lexicon::{ADDITIONAL_CONTEXTS, SITUATIONS, SUMMARY_MEDICATIONS, URGENCY_REASONS};
use super::sampling::{chance, pick};
use crate::models::{CallIntent, Level, NarrativeSummary, Sentiment};

const URGENCY_CLAUSE_PROBABILITY: f64 = 0.7;
const CONTEXT_PROBABILITY: f64 = 0.5;

/// Keywords that force the high-urgency refill classification.
const HIGH_URGENCY_KEYWORDS: &[&str] = &["tomorrow", "run out", "missing", "adverse", "worsening"];
const SIDE_EFFECT_KEYWORDS: &[&str] = &["side effect", "adverse"];
const INSURANCE_KEYWORDS: &[&str] = &["insurance", "afford"];

const ANXIOUS_KEYWORDS: &[&str] = &["concerned", "adverse", "worsening", "cannot afford"];
const URGENT_KEYWORDS: &[&str] = &["urgency", "tomorrow"];

/// Build a summary and classify it.
pub fn compose_summary<R: Rng + ?Sized>(rng: &mut R) -> NarrativeSummary {
    let mut summary = format!(
        "Patient {} {}",
        pick(rng, SITUATIONS),
        pick(rng, SUMMARY_MEDICATIONS)
    );

    if chance(rng, URGENCY_CLAUSE_PROBABILITY) {
        summary.push(' ');
        summary.push_str(pick(rng, URGENCY_REASONS));
    }

    if chance(rng, CONTEXT_PROBABILITY) {
        summary.push(' ');
        summary.push_str(pick(rng, ADDITIONAL_CONTEXTS));
    }

    let (intent, urgency) = classify_intent(&summary);
    let sentiment = classify_sentiment(&summary).unwrap_or_else(|| pick(rng, Sentiment::UNMARKED));

    NarrativeSummary {
        summary,
        intent,
        urgency,
        sentiment,
    }
}

/// Intent and urgency by keyword. First matching rule wins.
pub fn classify_intent(summary: &str) -> (CallIntent, Level) {
    let lower = summary.to_lowercase();

    if contains_any(&lower, HIGH_URGENCY_KEYWORDS) {
        (CallIntent::UrgentRefillRequest, Level::High)
    } else if contains_any(&lower, SIDE_EFFECT_KEYWORDS) {
        (CallIntent::SideEffectReport, Level::Medium)
    } else if contains_any(&lower, INSURANCE_KEYWORDS) {
        (CallIntent::InsuranceQuery, Level::Medium)
    } else {
        (CallIntent::GeneralInquiry, Level::Low)
    }
}

/// Keyword-driven sentiment. `None` when nothing matches; the caller
/// then draws from [`Sentiment::UNMARKED`].
pub fn classify_sentiment(summary: &str) -> Option<Sentiment> {
    let lower = summary.to_lowercase();

    if contains_any(&lower, ANXIOUS_KEYWORDS) {
        Some(Sentiment::Anxious)
    } else if contains_any(&lower, URGENT_KEYWORDS) {
        Some(Sentiment::Urgent)
    } else {
        None
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
