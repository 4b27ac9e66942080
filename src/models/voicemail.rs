use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{CallbackPreference, VoicemailType};

/// Synthesized voicemail content.
///
/// `urgent` and `requires_pharmacist` are always derived from
/// `voicemail_type`. They are serialized but never read back: deserializing
/// goes through [`VoicemailParts`] and re-derives them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "VoicemailParts")]
pub struct VoicemailRecord {
    pub voicemail_type: VoicemailType,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Raw `"<n> seconds"` form.
    pub duration: String,
    pub callback_number: String,
    pub prescription_mentioned: Option<String>,
    urgent: bool,
    requires_pharmacist: bool,
    pub call_back_preference: CallbackPreference,
    pub auto_transcription_confidence: u8,
}

/// Everything except the type-derived flags.
#[derive(Debug, Clone, Deserialize)]
pub struct VoicemailParts {
    pub voicemail_type: VoicemailType,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub duration: String,
    pub callback_number: String,
    pub prescription_mentioned: Option<String>,
    pub call_back_preference: CallbackPreference,
    pub auto_transcription_confidence: u8,
}

impl VoicemailRecord {
    pub fn new(parts: VoicemailParts) -> Self {
        Self {
            urgent: parts.voicemail_type.is_urgent(),
            requires_pharmacist: parts.voicemail_type.requires_pharmacist(),
            voicemail_type: parts.voicemail_type,
            message: parts.message,
            timestamp: parts.timestamp,
            duration: parts.duration,
            callback_number: parts.callback_number,
            prescription_mentioned: parts.prescription_mentioned,
            call_back_preference: parts.call_back_preference,
            auto_transcription_confidence: parts.auto_transcription_confidence,
        }
    }

    pub fn urgent(&self) -> bool {
        self.urgent
    }

    pub fn requires_pharmacist(&self) -> bool {
        self.requires_pharmacist
    }
}

impl From<VoicemailParts> for VoicemailRecord {
    fn from(parts: VoicemailParts) -> Self {
        Self::new(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parts(voicemail_type: VoicemailType) -> VoicemailParts {
        VoicemailParts {
            voicemail_type,
            message: "Hello, Maria Garcia here.".into(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 14, 14, 30, 0).unwrap(),
            duration: "42 seconds".into(),
            callback_number: "(555) 234-5678".into(),
            prescription_mentioned: None,
            call_back_preference: CallbackPreference::Morning,
            auto_transcription_confidence: 91,
        }
    }

    #[test]
    fn new_derives_flags_from_type() {
        let urgent = VoicemailRecord::new(parts(VoicemailType::UrgentRequest));
        assert!(urgent.urgent());
        assert!(urgent.requires_pharmacist());

        let refill = VoicemailRecord::new(parts(VoicemailType::RefillRequest));
        assert!(!refill.urgent());
        assert!(!refill.requires_pharmacist());
    }

    #[test]
    fn serialized_flags_follow_type() {
        let record = VoicemailRecord::new(parts(VoicemailType::SideEffectConcern));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["urgent"], false);
        assert_eq!(json["requires_pharmacist"], true);
    }

    #[test]
    fn deserializing_ignores_forged_flags() {
        let record = VoicemailRecord::new(parts(VoicemailType::RefillRequest));
        let mut json = serde_json::to_value(&record).unwrap();
        json["urgent"] = serde_json::Value::Bool(true);
        json["requires_pharmacist"] = serde_json::Value::Bool(true);

        let back: VoicemailRecord = serde_json::from_value(json).unwrap();
        assert!(!back.urgent());
        assert!(!back.requires_pharmacist());
        assert_eq!(back, record);
    }
}
