use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Level;

/// Mock "AI analysis" attached to a call or produced on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub sentiment_analysis: SentimentAnalysis,
    pub risk_assessment: RiskAssessment,
    pub action_items: Vec<ActionItem>,
    pub compliance_check: ComplianceCheck,
    pub call_quality: CallQuality,
    pub topics_identified: Vec<String>,
    pub historical_context: HistoricalContext,
    pub ai_recommendations: AiRecommendations,
    pub analysis_timestamp: DateTime<Utc>,
    pub analysis_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub primary_emotion: String,
    pub secondary_emotions: Vec<String>,
    pub confidence_score: u8,
    pub emotion_triggers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_level: Level,
    pub risk_factors: Vec<String>,
    pub compliance_score: u8,
    pub adherence_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub action: String,
    pub priority: Level,
    pub deadline: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub hipaa_compliant: bool,
    pub phi_disclosed: bool,
    pub required_disclaimers_given: bool,
    pub consent_verified: bool,
    pub documentation_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallQuality {
    pub clarity_score: u8,
    pub resolution_completeness: u8,
    pub customer_satisfaction_predicted: u8,
    pub follow_up_needed: bool,
    pub escalation_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalContext {
    pub previous_interactions: u8,
    pub common_issues: Vec<String>,
    pub patient_profile_flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiRecommendations {
    pub immediate_actions: Vec<String>,
    pub long_term_suggestions: Vec<String>,
}
