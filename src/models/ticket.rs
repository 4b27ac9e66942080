use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Level;

/// Synthetic triage record attached to every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketMetadata {
    pub ticket_id: String,
    pub department: String,
    pub priority: Level,
    pub ticket_type: String,
    pub assigned_to: String,
    pub sla_hours: u8,
    pub tags: Vec<String>,
}

/// Ticket raised from a finished analysis (workflow `ticket_generated` stage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub ticket_id: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub priority: Level,
    pub risk_level: Level,
    pub required_actions: usize,
    pub compliance_score: u8,
    pub follow_up_required: bool,
    pub primary_concerns: Vec<String>,
    pub immediate_actions: Vec<String>,
}

impl fmt::Display for SupportTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ticket ID: {}", self.ticket_id)?;
        writeln!(f, "Created: {}", self.created_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Priority: {}", self.priority)?;
        writeln!(f, "Risk Level: {}", self.risk_level)?;
        writeln!(f, "Required Actions: {}", self.required_actions)?;
        writeln!(f, "Compliance Score: {}%", self.compliance_score)?;
        writeln!(
            f,
            "Follow-up Required: {}",
            if self.follow_up_required { "Yes" } else { "No" }
        )?;
        writeln!(f)?;
        writeln!(f, "Primary Concerns:")?;
        for concern in &self.primary_concerns {
            writeln!(f, "- {concern}")?;
        }
        writeln!(f)?;
        writeln!(f, "Immediate Actions Required:")?;
        for action in &self.immediate_actions {
            writeln!(f, "- {action}")?;
        }
        Ok(())
    }
}
