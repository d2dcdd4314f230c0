//! Readiness scoring engine.
//!
//! Converts a user's answer history for one exam bank into a single 0-100
//! readiness score plus the sub-metrics it is built from.

use std::collections::HashSet;

use chrono::Utc;

use crate::model::{ReadinessResult, ScoreInput};

/// Milliseconds in one day
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Share of the bank, in unique-correct answers, at which volume saturates
pub const VOLUME_REFERENCE_RATIO: f64 = 0.6;

/// Time constant of the per-answer accuracy decay, in days
pub const DECAY_TAU_DAYS: f64 = 30.0;

/// Days of inactivity after which recency reaches zero
pub const RECENCY_WINDOW_DAYS: f64 = 30.0;

/// Unique questions at or below which the score is withheld
pub const MIN_UNIQUE: usize = 50;

/// Unique questions at which reliability reaches 1
pub const MAX_UNIQUE: usize = 300;

/// Smallest weighted total still considered a usable accuracy sample
pub const WEIGHT_EPSILON: f64 = 0.0001;

pub const VOLUME_WEIGHT: f64 = 0.45;
pub const ACCURACY_WEIGHT: f64 = 0.30;
pub const RECENCY_WEIGHT: f64 = 0.15;
pub const COVERAGE_WEIGHT: f64 = 0.10;

/// Compute the readiness result for `input` as seen at `now_ms`.
///
/// The function is pure: it never reads the clock, never mutates the input
/// and returns the same result for the same `(input, now_ms)` pair.
///
/// # Arguments
///
/// * `input` - Answer history and bank size
/// * `now_ms` - Reference time in epoch milliseconds
///
/// # Algorithm
///
/// * Volume: `1 - exp(-unique_correct / (0.6 * bank))`
/// * Accuracy: correct share with each answer weighted by `exp(-age_days / 30)`
/// * Recency: linear decay from 1 to 0 over 30 days since the last answer
/// * Coverage: mean of `unique / bank` and `unique / total`
/// * Reliability: 0 up to 50 unique questions, then linear up to 1 at 300
///
/// The final score is `round(100 * clamp(0.45 v + 0.30 a + 0.15 r + 0.10 c) * reliability)`.
/// An empty history short-circuits to an all-zero result.
pub fn compute_readiness(input: &ScoreInput, now_ms: i64) -> ReadinessResult {
    let answers = &input.answers;
    if answers.is_empty() {
        return ReadinessResult::default();
    }

    let total_answers = answers.len();
    let safe_bank_size = input.safe_bank_size() as f64;

    let mut unique_ids: HashSet<&str> = HashSet::new();
    let mut unique_correct_ids: HashSet<&str> = HashSet::new();
    let mut weighted_total = 0.0;
    let mut weighted_correct = 0.0;
    let mut last_attempt_at = i64::MIN;

    for answer in answers {
        unique_ids.insert(&answer.question_id);
        if answer.is_correct {
            unique_correct_ids.insert(&answer.question_id);
        }

        let weight = decay_weight(age_days(now_ms, answer.timestamp_ms));
        weighted_total += weight;
        if answer.is_correct {
            weighted_correct += weight;
        }

        last_attempt_at = last_attempt_at.max(answer.timestamp_ms);
    }

    let unique_questions = unique_ids.len();
    let unique_correct = unique_correct_ids.len();

    let volume_score = volume_score(unique_correct, safe_bank_size);

    let accuracy_score = if weighted_total > WEIGHT_EPSILON {
        (weighted_correct / weighted_total).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let recency_score = recency_score(age_days(now_ms, last_attempt_at));

    let coverage_raw = (unique_questions as f64 / safe_bank_size).clamp(0.0, 1.0);
    let diversity_raw = (unique_questions as f64 / total_answers as f64).clamp(0.0, 1.0);
    let coverage_score = 0.5 * coverage_raw + 0.5 * diversity_raw;

    let reliability = reliability(unique_questions);

    let base01 = VOLUME_WEIGHT * volume_score
        + ACCURACY_WEIGHT * accuracy_score
        + RECENCY_WEIGHT * recency_score
        + COVERAGE_WEIGHT * coverage_score;
    let final01 = base01.clamp(0.0, 1.0) * reliability;

    ReadinessResult {
        score: to_score(final01),
        volume_score,
        accuracy_score,
        recency_score,
        coverage_score,
        reliability,
        unique_questions,
        unique_correct,
        total_answers,
    }
}

/// Compute the readiness result against the current wall-clock time.
pub fn compute_readiness_now(input: &ScoreInput) -> ReadinessResult {
    compute_readiness(input, Utc::now().timestamp_millis())
}

/// Exponential saturation of unique-correct answers against 60% of the bank.
pub fn volume_score(unique_correct: usize, safe_bank_size: f64) -> f64 {
    let v_ref = VOLUME_REFERENCE_RATIO * safe_bank_size;
    let volume_raw = unique_correct as f64 / v_ref;
    (1.0 - (-volume_raw).exp()).clamp(0.0, 1.0)
}

/// Confidence ramp from [`MIN_UNIQUE`] to [`MAX_UNIQUE`] unique questions.
pub fn reliability(unique_questions: usize) -> f64 {
    if unique_questions <= MIN_UNIQUE {
        return 0.0;
    }

    ((unique_questions - MIN_UNIQUE) as f64 / (MAX_UNIQUE - MIN_UNIQUE) as f64).clamp(0.0, 1.0)
}

/// Recency from the days elapsed since the last answer.
pub fn recency_score(days_since_last: f64) -> f64 {
    1.0 - (days_since_last.max(0.0) / RECENCY_WINDOW_DAYS).clamp(0.0, 1.0)
}

// Computed in f64 so that extreme timestamps cannot overflow the subtraction.
fn age_days(now_ms: i64, timestamp_ms: i64) -> f64 {
    (now_ms as f64 - timestamp_ms as f64) / MS_PER_DAY
}

fn decay_weight(age_days: f64) -> f64 {
    (-age_days.max(0.0) / DECAY_TAU_DAYS).exp()
}

fn to_score(final01: f64) -> u8 {
    (100.0 * final01.clamp(0.0, 1.0)).round() as u8
}
