use async_trait::async_trait;
use prep_db::{
    models::{AttemptAnswers, QuizBank},
    repositories::{attempt, quiz},
};
use sqlx::PgPool;
use uuid::Uuid;

/// Read access to the stored quiz attempts the readiness score is built from.
///
/// Implementations perform the I/O; retries and timeouts are their concern.
/// Errors are reported as-is and never turned into partial data.
#[async_trait]
pub trait AttemptSource: Send + Sync {
    /// Quiz metadata, `None` when the quiz does not exist.
    async fn quiz_bank(&self, quiz_id: Uuid) -> Result<Option<QuizBank>, sqlx::Error>;

    /// All attempts by `user_id` on `quiz_id`, in a stable order.
    async fn attempts(
        &self,
        user_id: Uuid,
        quiz_id: Uuid,
    ) -> Result<Vec<AttemptAnswers>, sqlx::Error>;
}

/// [`AttemptSource`] backed by the PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgAttemptSource {
    pool: PgPool,
}

impl PgAttemptSource {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttemptSource for PgAttemptSource {
    async fn quiz_bank(&self, quiz_id: Uuid) -> Result<Option<QuizBank>, sqlx::Error> {
        quiz::get_bank(&self.pool, quiz_id).await
    }

    async fn attempts(
        &self,
        user_id: Uuid,
        quiz_id: Uuid,
    ) -> Result<Vec<AttemptAnswers>, sqlx::Error> {
        attempt::list_for_user_quiz(&self.pool, user_id, quiz_id).await
    }
}
