use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::AnalysisRecord;
use super::enums::CallStatus;
use super::ticket::TicketMetadata;
use super::voicemail::VoicemailRecord;

/// One fabricated pharmacy voicemail event. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub call_id: String,
    pub customer_name: String,
    pub timestamp: DateTime<Utc>,
    pub duration_seconds: u32,
    pub duration_display: String,
    pub category: String,
    pub status: CallStatus,
    pub callback_required: bool,
    pub prescriptions_discussed: u8,
    pub voicemail_data: VoicemailRecord,
    pub metadata: TicketMetadata,
    pub analysis: AnalysisRecord,
}

impl CallRecord {
    pub fn is_urgent(&self) -> bool {
        self.status == CallStatus::Urgent
    }
}
