//! Assembly of readiness input from stored quiz attempts.

mod normalize;
mod source;

use std::sync::Arc;

use prep_score::ScoreInput;
use thiserror::Error;
use uuid::Uuid;

pub use normalize::{Normalized, NormalizedAttempt, SkipReason, normalize_answer, normalize_attempt};
pub use source::{AttemptSource, PgAttemptSource};

#[derive(Error, Debug)]
pub enum AssembleError {
    /// The attempt history could not be read. Never reported as a zero score.
    #[error("Readiness data unavailable: {0}")]
    DataUnavailable(#[source] sqlx::Error),
    #[error("Quiz not found: {0}")]
    QuizNotFound(Uuid),
}

/// Builds a [`ScoreInput`] for one user and one quiz.
#[derive(Clone)]
pub struct ScoreInputAssembler {
    source: Arc<dyn AttemptSource>,
}

impl std::fmt::Debug for ScoreInputAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreInputAssembler").finish_non_exhaustive()
    }
}

impl ScoreInputAssembler {
    pub fn new(source: Arc<dyn AttemptSource>) -> Self {
        Self { source }
    }

    /// Fetch the quiz bank and every attempt, then flatten the attempts'
    /// answers into events.
    ///
    /// Either both reads succeed and the full history is returned, or the
    /// call fails with [`AssembleError::DataUnavailable`].
    #[tracing::instrument(skip(self))]
    pub async fn assemble(&self, user_id: Uuid, quiz_id: Uuid) -> Result<ScoreInput, AssembleError> {
        let bank = self
            .source
            .quiz_bank(quiz_id)
            .await
            .map_err(AssembleError::DataUnavailable)?
            .ok_or(AssembleError::QuizNotFound(quiz_id))?;

        let attempts = self
            .source
            .attempts(user_id, quiz_id)
            .await
            .map_err(AssembleError::DataUnavailable)?;

        let mut answers = Vec::new();
        let mut skipped = 0;
        for attempt in &attempts {
            let normalized = normalize_attempt(attempt.answers.as_ref(), attempt.created_at.timestamp_millis());
            answers.extend(normalized.events);
            skipped += normalized.skipped;
        }

        if skipped > 0 {
            tracing::debug!(skipped, "Skipped malformed answer records");
        }

        // Non-positive or missing sizes are left for the engine's fallback
        let bank_size = bank
            .total_questions
            .map(i64::from)
            .filter(|n| *n > 0)
            .unwrap_or(0);

        tracing::debug!(
            attempts = attempts.len(),
            answers = answers.len(),
            bank_size,
            "Assembled readiness input"
        );

        Ok(ScoreInput::new(answers, bank_size))
    }
}
