//! Call record builder.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use rand::Rng;
use regex::Regex;

use super::analysis::generate_analysis;
use super::lexicon::CUSTOMER_NAMES;
use super::sampling::pick;
use super::ticket::generate_metadata;
use super::voicemail::synthesize_voicemail;
use super::EngineError;
use crate::config::CALL_ID_YEAR;
use crate::models::{CallRecord, CallStatus};

/// Distinct four-digit suffixes available for call ids.
const CALL_ID_SPACE: usize = 9000;

static LEADING_INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)").expect("valid leading-integer regex")
});

/// Parse the leading integer of a duration string (`"45 seconds"` → 45).
pub fn parse_duration_seconds(duration: &str) -> Result<u32, EngineError> {
    LEADING_INTEGER
        .captures(duration)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .ok_or_else(|| EngineError::MalformedDuration(duration.to_string()))
}

/// `CALL-<year><4 digits>`.
pub fn call_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("CALL-{CALL_ID_YEAR}{}", rng.gen_range(1000..=9999u16))
}

/// Build `n` call records in insertion order.
///
/// Call ids are unique within the batch as long as `n` fits the id space.
/// A malformed voicemail duration aborts the whole batch.
pub fn build_batch<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    now: DateTime<Utc>,
) -> Result<Vec<CallRecord>, EngineError> {
    let mut seen_ids = HashSet::with_capacity(n);
    let mut calls = Vec::with_capacity(n);

    for _ in 0..n {
        let customer_name = pick(rng, CUSTOMER_NAMES);
        let voicemail = synthesize_voicemail(rng, customer_name, now);
        let analysis = generate_analysis(rng, now);
        let metadata = generate_metadata(rng);
        let duration_seconds = parse_duration_seconds(&voicemail.duration)?;

        let status = if voicemail.urgent() {
            CallStatus::Urgent
        } else {
            pick(rng, CallStatus::NON_URGENT)
        };

        let mut id = call_id(rng);
        while seen_ids.contains(&id) && seen_ids.len() < CALL_ID_SPACE {
            id = call_id(rng);
        }
        seen_ids.insert(id.clone());

        calls.push(CallRecord {
            call_id: id,
            customer_name: customer_name.to_string(),
            timestamp: voicemail.timestamp,
            duration_seconds,
            duration_display: voicemail.duration.clone(),
            category: voicemail.voicemail_type.category_label(),
            status,
            callback_required: true,
            prescriptions_discussed: u8::from(voicemail.prescription_mentioned.is_some()),
            voicemail_data: voicemail,
            metadata,
            analysis,
        });
    }

    tracing::debug!(count = calls.len(), "Built call batch");
    Ok(calls)
}
