use serde::{Deserialize, Deserializer, Serialize};

/// Bank size substituted when the exam metadata carries no usable value.
pub const FALLBACK_BANK_SIZE: i64 = 1000;

/// One historical response to a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvent {
    /// Stable, opaque identifier of the answered question
    pub question_id: String,
    /// Whether the submitted answer was correct
    pub is_correct: bool,
    /// Epoch milliseconds at which the answer was submitted
    pub timestamp_ms: i64,
}

impl AnswerEvent {
    pub fn new(question_id: impl Into<String>, is_correct: bool, timestamp_ms: i64) -> Self {
        Self {
            question_id: question_id.into(),
            is_correct,
            timestamp_ms,
        }
    }
}

/// Everything the engine needs for one computation.
///
/// Built fresh per request. `bank_size` is kept as received: a missing, null
/// or non-positive value is only replaced by [`FALLBACK_BANK_SIZE`] when the
/// engine reads it through [`ScoreInput::safe_bank_size`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreInput {
    /// Answer history, in no particular order
    #[serde(default)]
    pub answers: Vec<AnswerEvent>,
    /// Total number of distinct questions in the exam's bank
    #[serde(default, deserialize_with = "nullable_bank_size")]
    pub bank_size: i64,
}

impl ScoreInput {
    pub fn new(answers: Vec<AnswerEvent>, bank_size: i64) -> Self {
        Self { answers, bank_size }
    }

    /// Bank size with the fallback applied.
    pub const fn safe_bank_size(&self) -> i64 {
        if self.bank_size > 0 {
            self.bank_size
        } else {
            FALLBACK_BANK_SIZE
        }
    }
}

fn nullable_bank_size<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Output of a readiness computation.
///
/// Every sub-metric is kept so that consumers can display them side by side
/// with the final score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResult {
    /// Final readiness score in `[0, 100]`
    pub score: u8,
    /// Saturating measure of distinct questions answered correctly, `[0, 1]`
    pub volume_score: f64,
    /// Recency-weighted share of correct answers, `[0, 1]`
    pub accuracy_score: f64,
    /// Freshness of the latest activity, `[0, 1]`
    pub recency_score: f64,
    /// Breadth against the bank and against the user's own activity, `[0, 1]`
    pub coverage_score: f64,
    /// Confidence multiplier applied to the composite, `[0, 1]`
    pub reliability: f64,
    /// Distinct questions answered
    pub unique_questions: usize,
    /// Distinct questions answered correctly at least once
    pub unique_correct: usize,
    /// Raw number of answer events
    pub total_answers: usize,
}
