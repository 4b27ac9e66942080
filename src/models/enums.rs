use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form doubles as the serde representation.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(
    /// Scenario a synthetic voicemail is composed from.
    VoicemailType {
        RefillRequest => "refill_request",
        UrgentRequest => "urgent_request",
        InsuranceQuery => "insurance_query",
        SideEffectConcern => "side_effect_concern",
        TransferRequest => "transfer_request",
        CostConcern => "cost_concern",
    }
);

impl VoicemailType {
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::UrgentRequest)
    }

    pub fn requires_pharmacist(&self) -> bool {
        matches!(self, Self::SideEffectConcern | Self::UrgentRequest)
    }

    /// Human-readable category: `side_effect_concern` → `Side Effect Concern`.
    pub fn category_label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

str_enum!(CallStatus {
    New => "New",
    Pending => "Pending",
    InProgress => "In Progress",
    Urgent => "Urgent",
});

impl CallStatus {
    /// Statuses a non-urgent call is drawn from.
    pub const NON_URGENT: &'static [CallStatus] =
        &[CallStatus::New, CallStatus::Pending, CallStatus::InProgress];

    /// Rank used by priority sorting (lower sorts first).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Urgent => 0,
            Self::InProgress => 1,
            Self::Pending => 2,
            Self::New => 3,
        }
    }
}

str_enum!(CallbackPreference {
    Morning => "Morning",
    Afternoon => "Afternoon",
    Evening => "Evening",
    Asap => "ASAP",
    AnyTime => "Any time",
});

str_enum!(
    /// Three-step scale shared by urgency, risk, ticket and action priority.
    Level {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
);

str_enum!(CallIntent {
    UrgentRefillRequest => "Urgent Refill Request",
    SideEffectReport => "Side Effect Report",
    InsuranceQuery => "Insurance Query",
    GeneralInquiry => "General Inquiry",
});

str_enum!(Sentiment {
    Anxious => "Anxious",
    Urgent => "Urgent",
    Neutral => "Neutral",
    Calm => "Calm",
    Inquiring => "Inquiring",
});

impl Sentiment {
    /// Sentiments drawn when the summary carries no emotional keyword.
    pub const UNMARKED: &'static [Sentiment] =
        &[Sentiment::Neutral, Sentiment::Calm, Sentiment::Inquiring];
}
