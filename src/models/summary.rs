use serde::{Deserialize, Serialize};

use super::enums::{CallIntent, Level, Sentiment};

/// Free-text call summary with its keyword-derived labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeSummary {
    pub summary: String,
    pub intent: CallIntent,
    pub urgency: Level,
    pub sentiment: Sentiment,
}

/// Summary-level analysis: narrative labels plus similar cases and key phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryAnalysis {
    pub call_summary: String,
    pub primary_intent: CallIntent,
    pub confidence_score: u8,
    pub urgency_level: Level,
    pub sentiment: Sentiment,
    pub similar_cases: Vec<SimilarCase>,
    pub key_phrases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarCase {
    pub case_id: String,
    pub similarity: u8,
    pub resolution: String,
}
