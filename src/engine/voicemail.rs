//! Voicemail synthesizer.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::lexicon::{templates_for, CLOSINGS, TIME_PREFERENCES, VOICEMAIL_MEDICATIONS};
use super::sampling::{chance, pick};
use crate::models::{CallbackPreference, VoicemailParts, VoicemailRecord, VoicemailType};

const TIME_PREFERENCE_PROBABILITY: f64 = 0.5;

/// Minutes before `now` a voicemail may have been left.
pub const AGE_MINUTES: std::ops::RangeInclusive<i64> = 5..=120;
pub const DURATION_SECONDS: std::ops::RangeInclusive<u32> = 20..=90;
pub const TRANSCRIPTION_CONFIDENCE: std::ops::RangeInclusive<u8> = 85..=99;

/// `RX` followed by six digits.
pub fn prescription_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("RX{}", rng.gen_range(100_000..=999_999u32))
}

/// North American style `(NXX) NXX-XXXX`.
pub fn callback_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "({}) {}-{}",
        rng.gen_range(200..=999u16),
        rng.gen_range(200..=999u16),
        rng.gen_range(1000..=9999u16)
    )
}

/// Compose a full voicemail for `customer_name`, left shortly before `now`.
pub fn synthesize_voicemail<R: Rng + ?Sized>(
    rng: &mut R,
    customer_name: &str,
    now: DateTime<Utc>,
) -> VoicemailRecord {
    let rx = prescription_id(rng);
    let medication = pick(rng, VOICEMAIL_MEDICATIONS);
    let phone = callback_number(rng);

    let voicemail_type = pick(rng, VoicemailType::ALL);
    let template = pick(rng, &templates_for(voicemail_type));

    let mut message = template
        .replace("{name}", customer_name)
        .replace("{medication}", medication)
        .replace("{rx}", &rx)
        .replace("{phone}", &phone);

    message.push(' ');
    message.push_str(pick(rng, CLOSINGS));
    if chance(rng, TIME_PREFERENCE_PROBABILITY) {
        message.push(' ');
        message.push_str(pick(rng, TIME_PREFERENCES));
    }

    let prescription_mentioned = message.contains(&rx).then_some(rx);

    let timestamp = now - Duration::minutes(rng.gen_range(AGE_MINUTES));
    let duration = format!("{} seconds", rng.gen_range(DURATION_SECONDS));

    VoicemailRecord::new(VoicemailParts {
        voicemail_type,
        message,
        timestamp,
        duration,
        callback_number: phone,
        prescription_mentioned,
        call_back_preference: pick(rng, CallbackPreference::ALL),
        auto_transcription_confidence: rng.gen_range(TRANSCRIPTION_CONFIDENCE),
    })
}
