//! Static phrase tables the generators compose records from.
//!
//! Every table is non-empty; tests below pin the sizes the generators'
//! sampling ranges assume.

use crate::models::{Level, VoicemailType};

// ═══════════════════════════════════════════
// Narrative summaries
// ═══════════════════════════════════════════

pub const SUMMARY_MEDICATIONS: &[&str] = &[
    "blood pressure medication",
    "insulin",
    "antidepressants",
    "pain medication",
    "cholesterol medication",
    "thyroid medication",
    "antibiotic prescription",
    "asthma inhaler",
    "anti-anxiety medication",
    "heart medication",
];

pub const SITUATIONS: &[&str] = &[
    "running low on",
    "lost their",
    "needs clarification about dosage for",
    "experiencing side effects from",
    "requesting refill for",
    "concerned about interaction with",
    "needs prior authorization for",
    "reported adverse reaction to",
    "seeking alternative to",
    "cannot afford",
    "missed several doses of",
];

pub const URGENCY_REASONS: &[&str] = &[
    "due to upcoming travel plans",
    "as current supply will run out tomorrow",
    "due to worsening symptoms",
    "because of insurance expiration",
    "before leaving for vacation",
    "after missing several doses",
    "following doctor's new instructions",
    "due to pharmacy closure",
    "because of adverse reactions",
];

pub const ADDITIONAL_CONTEXTS: &[&str] = &[
    "Insurance requires documentation.",
    "Previous prescription shows no refills remaining.",
    "Patient reported dizziness as side effect.",
    "Needs copay assistance program information.",
    "Recently switched from different medication.",
    "Requires pharmacist consultation.",
    "Doctor's office needs to be contacted.",
    "Patient has questions about proper storage.",
    "Concerned about drug interactions.",
    "Requesting home delivery options.",
    "Needs Spanish-speaking pharmacist.",
];

// ═══════════════════════════════════════════
// Voicemail composition
// ═══════════════════════════════════════════

pub const VOICEMAIL_MEDICATIONS: &[&str] = &[
    "Lisinopril 10mg",
    "Metformin 1000mg",
    "Atorvastatin 40mg",
    "Sertraline 50mg",
    "Levothyroxine 75mcg",
    "Amoxicillin 500mg",
    "Omeprazole 20mg",
    "Gabapentin 300mg",
    "Hydrochlorothiazide 25mg",
];

/// Two message variants per scenario. Placeholders: `{name}`,
/// `{medication}`, `{rx}`, `{phone}`. Not every variant uses all four.
pub fn templates_for(kind: VoicemailType) -> [&'static str; 2] {
    match kind {
        VoicemailType::RefillRequest => [
            "Hi, this is {name} calling about my prescription {rx} for {medication}. \
             I'm running low and need a refill. My number is {phone}. \
             Please call me back to let me know when it will be ready.",
            "Hello, {name} here. I need to refill my {medication}, \
             prescription number {rx}. I'm down to my last few pills. \
             You can reach me at {phone}. Thank you.",
        ],
        VoicemailType::UrgentRequest => [
            "This is {name} and I urgently need my {medication}. \
             I'm completely out and it's prescription {rx}. \
             Please call me as soon as possible at {phone}. \
             This is really important.",
            "Hello, {name} calling. I have an emergency with my prescription {rx}. \
             I lost my medication bottle of {medication} while traveling. \
             Please call me back immediately at {phone}. \
             I need this medication daily.",
        ],
        VoicemailType::InsuranceQuery => [
            "Hi, this is {name}. I'm calling about a problem with my insurance coverage \
             for prescription {rx}. They're saying it needs prior authorization. \
             Please call me back at {phone} to discuss this.",
            "Hello, {name} here. I got a message saying there's an insurance issue \
             with my {medication}. My number is {phone}. \
             I need to know what I need to do to get this resolved.",
        ],
        VoicemailType::SideEffectConcern => [
            "This is {name} calling about my prescription {rx} for {medication}. \
             I'm experiencing some side effects and need to speak with a pharmacist. \
             My callback number is {phone}.",
            "Hi, {name} here. I've been having some reactions to my new prescription \
             {rx} and need to discuss this with someone. Please call me at \
             {phone}. I'm concerned about continuing the medication.",
        ],
        VoicemailType::TransferRequest => [
            "Hello, this is {name}. I need to transfer my prescriptions from another pharmacy. \
             I have about 5 medications including {medication}. \
             Please call me back at {phone} to help with this process.",
            "Hi, {name} calling about transferring my medications to your pharmacy. \
             My current prescription number is {rx}. You can reach me at {phone}. \
             I'd like to get this started as soon as possible.",
        ],
        VoicemailType::CostConcern => [
            "Hi, this is {name} calling about the cost of my prescription {rx}. \
             The price seems much higher than usual for my {medication}. \
             Please call me back at {phone} to discuss any discount options.",
            "Hello, {name} here. I'm having trouble affording my prescription and \
             wanted to know if there are any cheaper alternatives or discount programs available. \
             My number is {phone}.",
        ],
    }
}

pub const CLOSINGS: &[&str] = &[
    "Thanks for your help.",
    "Please call me back when you can.",
    "I appreciate your help with this.",
    "Looking forward to hearing back from you.",
    "Please let me know as soon as possible.",
];

pub const TIME_PREFERENCES: &[&str] = &[
    "I'm available anytime today.",
    "Best time to reach me is in the afternoon.",
    "Please call before 5pm if possible.",
    "I'm available between 9am and 6pm.",
    "You can call me back anytime.",
];

pub const CUSTOMER_NAMES: &[&str] = &[
    "Sarah Johnson",
    "Mike Smith",
    "Emily Brown",
    "James Wilson",
    "Maria Garcia",
    "David Lee",
    "Lisa Anderson",
    "Robert Taylor",
    "Jennifer Martinez",
    "William Davis",
    "Emma Thompson",
    "John Carter",
    "Patricia Rodriguez",
    "Michael Chang",
    "Susan Miller",
];

// ═══════════════════════════════════════════
// Ticket metadata
// ═══════════════════════════════════════════

pub const DEPARTMENTS: &[&str] = &[
    "Pharmacy",
    "Insurance",
    "Medical Review",
    "Customer Service",
    "Clinical Support",
];

pub const PRIORITIES: &[Level] = &[Level::High, Level::Medium, Level::Low];

pub const TICKET_TYPES: &[&str] = &[
    "Medication Issue",
    "Insurance Claim",
    "Prescription Renewal",
    "Side Effect Report",
    "Drug Interaction",
];

pub const SLA_HOURS: &[u8] = &[2, 4, 8, 24, 48];

pub const TICKET_TAGS: &[&str] = &[
    "#urgent",
    "#callback",
    "#prescription",
    "#insurance",
    "#review",
    "#followup",
];

// ═══════════════════════════════════════════
// Enhanced analysis
// ═══════════════════════════════════════════

pub const PRIMARY_EMOTIONS: &[&str] = &[
    "Anxious",
    "Frustrated",
    "Satisfied",
    "Confused",
    "Urgent",
    "Neutral",
    "Concerned",
    "Appreciative",
];

pub const SECONDARY_EMOTIONS: &[&str] = &[
    "Worried about cost",
    "Uncertain about instructions",
    "Relieved about solution",
    "Stressed about timeline",
    "Grateful for help",
    "Confused about process",
];

pub const EMOTION_TRIGGERS: &[&str] = &[
    "medication cost",
    "insurance coverage",
    "side effects",
    "waiting time",
    "prescription availability",
    "doctor approval",
];

pub const RISK_LEVELS: &[Level] = &[Level::Low, Level::Medium, Level::High];

pub const RISK_FACTORS: &[&str] = &[
    "Missed doses",
    "Drug interaction potential",
    "Side effect concerns",
    "Delayed refill",
    "Insurance expiration",
    "Multiple pharmacy usage",
];

pub const ADHERENCE_PATTERNS: &[&str] = &[
    "Regular refills",
    "Occasional delays",
    "Frequent missed doses",
    "Inconsistent pickup",
];

/// Fixed action item row: (action, priority, deadline, reason).
#[derive(Debug, Clone, Copy)]
pub struct ActionTemplate {
    pub action: &'static str,
    pub priority: Level,
    pub deadline: &'static str,
    pub reason: &'static str,
}

pub const ACTION_ITEMS: &[ActionTemplate] = &[
    ActionTemplate {
        action: "Schedule follow-up call",
        priority: Level::High,
        deadline: "24 hours",
        reason: "Discuss side effects",
    },
    ActionTemplate {
        action: "Contact prescribing physician",
        priority: Level::Medium,
        deadline: "48 hours",
        reason: "Verify dosage change",
    },
    ActionTemplate {
        action: "Process prior authorization",
        priority: Level::High,
        deadline: "24 hours",
        reason: "Insurance requirement",
    },
    ActionTemplate {
        action: "Update patient profile",
        priority: Level::Low,
        deadline: "72 hours",
        reason: "New contact information",
    },
    ActionTemplate {
        action: "Schedule medication review",
        priority: Level::Medium,
        deadline: "48 hours",
        reason: "Multiple medication interactions",
    },
];

pub const TOPICS: &[&str] = &[
    "Prescription Renewal",
    "Insurance Coverage",
    "Side Effects",
    "Drug Interactions",
    "Payment Concerns",
    "Delivery Options",
    "Dosage Instructions",
    "Generic Alternatives",
    "Prior Authorization",
    "Pharmacy Transfer",
];

pub const COMMON_ISSUES: &[&str] = &[
    "Regular early refill requests",
    "Frequent insurance queries",
    "Multiple medication adjustments",
    "Consistent payment concerns",
    "Regular side effect reports",
];

pub const PROFILE_FLAGS: &[&str] = &[
    "Chronic condition",
    "Multiple prescribers",
    "Complex medication regimen",
    "Special handling required",
    "Preferred language support",
];

pub const IMMEDIATE_ACTIONS: &[&str] = &[
    "Process emergency refill",
    "Schedule pharmacist consultation",
    "Contact prescribing physician",
    "Update insurance information",
    "Document reported side effects",
];

pub const LONG_TERM_SUGGESTIONS: &[&str] = &[
    "Enroll in auto-refill program",
    "Schedule regular medication review",
    "Consider medication synchronization",
    "Recommend patient assistance program",
    "Set up medication reminders",
];

// ═══════════════════════════════════════════
// Summary analysis
// ═══════════════════════════════════════════

pub const CASE_RESOLUTIONS: &[&str] = &[
    "Processed emergency refill and contacted doctor",
    "Provided copay assistance information",
    "Scheduled pharmacist consultation",
    "Transferred prescription to new location",
    "Contacted insurance for prior authorization",
    "Applied discount card to reduce cost",
    "Documented side effects and notified doctor",
    "Arranged home delivery service",
    "Provided medication interaction review",
    "Completed insurance override request",
];

pub const KEY_PHRASES: &[&str] = &[
    "medication shortage",
    "insurance coverage",
    "side effects",
    "urgent refill",
    "prior authorization",
    "drug interaction",
    "vacation override",
    "lost medication",
    "dosing schedule",
    "adverse reaction",
    "insurance denial",
    "travel emergency",
    "copay assistance",
    "pharmacy transfer",
    "home delivery",
    "consultation required",
    "doctor notification",
    "prescription expired",
    "language assistance",
    "payment plan",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_cover_sampling_ranges() {
        // secondary emotions / triggers are sampled 2 at a time
        assert!(SECONDARY_EMOTIONS.len() >= 2);
        assert!(EMOTION_TRIGGERS.len() >= 2);
        // up to 3 risk factors and action items, up to 4 topics and tags
        assert!(RISK_FACTORS.len() >= 3);
        assert!(ACTION_ITEMS.len() >= 3);
        assert!(TOPICS.len() >= 4);
        assert!(TICKET_TAGS.len() >= 4);
        assert_eq!(CUSTOMER_NAMES.len(), 15);
        assert_eq!(KEY_PHRASES.len(), 20);
    }

    #[test]
    fn no_empty_phrases() {
        for pool in [
            SUMMARY_MEDICATIONS,
            SITUATIONS,
            URGENCY_REASONS,
            ADDITIONAL_CONTEXTS,
            VOICEMAIL_MEDICATIONS,
            CLOSINGS,
            TIME_PREFERENCES,
            CUSTOMER_NAMES,
        ] {
            assert!(!pool.is_empty());
            assert!(pool.iter().all(|p| !p.trim().is_empty()));
        }
    }

    #[test]
    fn every_template_names_caller_and_phone() {
        for kind in VoicemailType::ALL {
            for template in templates_for(*kind) {
                assert!(template.contains("{name}"), "{kind}: {template}");
                assert!(template.contains("{phone}"), "{kind}: {template}");
            }
        }
    }

    #[test]
    fn some_templates_omit_prescription_number() {
        let omitting = VoicemailType::ALL
            .iter()
            .flat_map(|k| templates_for(*k))
            .filter(|t| !t.contains("{rx}"))
            .count();
        assert_eq!(omitting, 3);
    }
}
