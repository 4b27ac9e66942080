//! Analysis workflow state machine driven by the presentation layer.
//!
//! ```text
//! initial ──start_analysis──▶ analyzing ──complete_analysis──▶ show_results
//!    ▲                                                             │
//!    └────────start_new──── ticket_generated ◀──generate_ticket────┘
//! ```
//!
//! `reset` returns to `initial` from any stage. Entering `analyzing`
//! generates exactly one analysis; entering `ticket_generated` raises a
//! ticket from it.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::{generate_analysis, generate_support_ticket};
use crate::models::{AnalysisRecord, SupportTicket};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    #[default]
    Initial,
    Analyzing,
    ShowResults,
    TicketGenerated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowEvent {
    StartAnalysis,
    CompleteAnalysis,
    GenerateTicket,
    StartNew,
    Reset,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Event {event:?} is not valid in stage {from:?}")]
    InvalidTransition {
        from: AnalysisStage,
        event: WorkflowEvent,
    },
}

/// Pure transition table.
pub fn next_stage(
    from: AnalysisStage,
    event: WorkflowEvent,
) -> Result<AnalysisStage, WorkflowError> {
    use AnalysisStage::*;
    use WorkflowEvent::*;

    match (from, event) {
        (_, Reset) => Ok(Initial),
        (Initial, StartAnalysis) => Ok(Analyzing),
        (Analyzing, CompleteAnalysis) => Ok(ShowResults),
        (ShowResults, GenerateTicket) => Ok(TicketGenerated),
        (TicketGenerated, StartNew) => Ok(Initial),
        _ => Err(WorkflowError::InvalidTransition { from, event }),
    }
}

/// Workflow stage plus the artifacts produced along the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisWorkflow {
    stage: AnalysisStage,
    analysis: Option<AnalysisRecord>,
    ticket: Option<SupportTicket>,
}

impl AnalysisWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> AnalysisStage {
        self.stage
    }

    pub fn analysis(&self) -> Option<&AnalysisRecord> {
        self.analysis.as_ref()
    }

    pub fn ticket(&self) -> Option<&SupportTicket> {
        self.ticket.as_ref()
    }

    /// Apply `event`, running the engine operation tied to the stage entered.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        event: WorkflowEvent,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<AnalysisStage, WorkflowError> {
        let next = next_stage(self.stage, event)?;

        match next {
            AnalysisStage::Initial => {
                self.analysis = None;
                self.ticket = None;
            }
            AnalysisStage::Analyzing => {
                self.analysis = Some(generate_analysis(rng, now));
                self.ticket = None;
            }
            AnalysisStage::ShowResults => {}
            AnalysisStage::TicketGenerated => {
                // Reaching this stage requires passing through Analyzing.
                let Some(analysis) = self.analysis.as_ref() else {
                    return Err(WorkflowError::InvalidTransition {
                        from: self.stage,
                        event,
                    });
                };
                self.ticket = Some(generate_support_ticket(rng, analysis, now));
            }
        }

        tracing::debug!(from = ?self.stage, to = ?next, ?event, "Workflow transition");
        self.stage = next;
        Ok(next)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
