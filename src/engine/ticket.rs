//! Ticket metadata for calls, and support tickets raised from an analysis.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::lexicon::{DEPARTMENTS, PRIORITIES, SLA_HOURS, TICKET_TAGS, TICKET_TYPES};
use super::sampling::{pick, sample_phrases};
use crate::models::{AnalysisRecord, SupportTicket, TicketMetadata};

pub fn generate_metadata<R: Rng + ?Sized>(rng: &mut R) -> TicketMetadata {
    TicketMetadata {
        ticket_id: format!("TKT-{}", rng.gen_range(10_000..=99_999u32)),
        department: pick(rng, DEPARTMENTS).to_string(),
        priority: pick(rng, PRIORITIES),
        ticket_type: pick(rng, TICKET_TYPES).to_string(),
        assigned_to: format!("Agent-{}", rng.gen_range(100..=999u16)),
        sla_hours: pick(rng, SLA_HOURS),
        tags: sample_phrases(rng, TICKET_TAGS, 2..=4),
    }
}

/// Raise a support ticket summarizing `analysis`. Priority mirrors the risk level.
pub fn generate_support_ticket<R: Rng + ?Sized>(
    rng: &mut R,
    analysis: &AnalysisRecord,
    now: DateTime<Utc>,
) -> SupportTicket {
    let risk = &analysis.risk_assessment;
    SupportTicket {
        ticket_id: format!(
            "TKT-{}-{}",
            now.format("%Y%m%d"),
            rng.gen_range(1000..=9999u16)
        ),
        created_at: now,
        status: "Active".to_string(),
        priority: risk.risk_level,
        risk_level: risk.risk_level,
        required_actions: analysis.action_items.len(),
        compliance_score: risk.compliance_score,
        follow_up_required: analysis.call_quality.follow_up_needed,
        primary_concerns: analysis.topics_identified.clone(),
        immediate_actions: analysis.ai_recommendations.immediate_actions.clone(),
    }
}
