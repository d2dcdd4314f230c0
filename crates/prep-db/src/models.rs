use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Exam metadata needed to size the question bank
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizBank {
    /// Quiz identifier
    pub id: Uuid,
    /// Quiz title
    pub title: String,
    /// Number of distinct questions in the quiz bank (nullable for legacy quizzes)
    pub total_questions: Option<i32>,
}

/// One stored quiz attempt, reduced to what the readiness score reads
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AttemptAnswers {
    /// Attempt identifier
    pub id: Uuid,
    /// Per-question answers as stored by the client (JSONB, shape not enforced)
    pub answers: Option<serde_json::Value>,
    /// When the attempt was recorded
    pub created_at: DateTime<Utc>,
}
