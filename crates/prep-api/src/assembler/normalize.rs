//! Normalization of stored answer records into [`AnswerEvent`]s.
//!
//! Attempts store their answers as free-form JSON written by several client
//! versions, so field names and value types vary:
//!
//! * question id: `questionId`, `question_id` or `id`, as a string or an integer
//! * correctness: `isCorrect` or `is_correct`, as a boolean or an integer flag
//! * timestamp: `timestampMs`, `timestamp_ms`, `answeredAt` or `answered_at`,
//!   as epoch milliseconds or an RFC 3339 string
//!
//! For each field the first key holding a usable value wins.
//!
//! Every record maps to exactly one [`Normalized`] value. Records that cannot
//! be read are skipped with a reason rather than failing the whole attempt.

use chrono::DateTime;
use prep_score::AnswerEvent;
use serde_json::{Map, Value};

const QUESTION_ID_KEYS: [&str; 3] = ["questionId", "question_id", "id"];
const CORRECTNESS_KEYS: [&str; 2] = ["isCorrect", "is_correct"];
const TIMESTAMP_KEYS: [&str; 4] = ["timestampMs", "timestamp_ms", "answeredAt", "answered_at"];

/// Why a stored answer record was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record is not a JSON object
    NotAnObject,
    /// None of the question id fields is present
    MissingQuestionId,
    /// A question id field is present but holds an unusable value
    InvalidQuestionId,
    /// The correctness field holds neither a boolean nor an integer
    InvalidCorrectness,
}

/// Outcome of normalizing one stored answer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Event(AnswerEvent),
    Skipped(SkipReason),
}

/// Events extracted from one attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedAttempt {
    pub events: Vec<AnswerEvent>,
    pub skipped: usize,
}

/// Normalize every record of an attempt's `answers` value.
///
/// Anything other than a JSON array contributes no events. Records without
/// their own timestamp take `attempt_ms`, the attempt's creation time.
pub fn normalize_attempt(answers: Option<&Value>, attempt_ms: i64) -> NormalizedAttempt {
    let Some(Value::Array(records)) = answers else {
        return NormalizedAttempt::default();
    };

    let mut out = NormalizedAttempt {
        events: Vec::with_capacity(records.len()),
        skipped: 0,
    };

    for record in records {
        match normalize_answer(record, attempt_ms) {
            Normalized::Event(event) => out.events.push(event),
            Normalized::Skipped(reason) => {
                tracing::trace!(?reason, "Skipping stored answer record");
                out.skipped += 1;
            }
        }
    }

    out
}

/// Normalize a single stored answer record.
pub fn normalize_answer(record: &Value, attempt_ms: i64) -> Normalized {
    let Value::Object(fields) = record else {
        return Normalized::Skipped(SkipReason::NotAnObject);
    };

    let question_id = match question_id(fields) {
        Ok(id) => id,
        Err(reason) => return Normalized::Skipped(reason),
    };

    let is_correct = match correctness(fields) {
        Ok(flag) => flag,
        Err(reason) => return Normalized::Skipped(reason),
    };

    let timestamp_ms = timestamp_ms(fields).unwrap_or(attempt_ms);

    Normalized::Event(AnswerEvent::new(question_id, is_correct, timestamp_ms))
}

// First usable value wins; null and empty strings fall through to the next key.
fn question_id(fields: &Map<String, Value>) -> Result<String, SkipReason> {
    let mut reason = SkipReason::MissingQuestionId;

    for key in QUESTION_ID_KEYS {
        match fields.get(key) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) if !s.trim().is_empty() => return Ok(s.clone()),
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => return Ok(n.to_string()),
            Some(_) => reason = SkipReason::InvalidQuestionId,
        }
    }

    Err(reason)
}

// Missing or null correctness reads as a wrong answer.
fn correctness(fields: &Map<String, Value>) -> Result<bool, SkipReason> {
    for key in CORRECTNESS_KEYS {
        match fields.get(key) {
            None | Some(Value::Null) => {}
            Some(Value::Bool(flag)) => return Ok(*flag),
            Some(Value::Number(n)) => {
                return n
                    .as_i64()
                    .map(|v| v != 0)
                    .ok_or(SkipReason::InvalidCorrectness);
            }
            Some(_) => return Err(SkipReason::InvalidCorrectness),
        }
    }

    Ok(false)
}

fn timestamp_ms(fields: &Map<String, Value>) -> Option<i64> {
    TIMESTAMP_KEYS
        .into_iter()
        .find_map(|key| match fields.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.timestamp_millis()),
            _ => None,
        })
}
