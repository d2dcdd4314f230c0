use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::AttemptAnswers;

/// Every attempt a user made on a quiz, oldest first.
///
/// The order is total (`created_at`, then `id`) so repeated reads of the same
/// data return the same sequence.
pub async fn list_for_user_quiz<'e, E>(
    executor: E,
    user_id: Uuid,
    quiz_id: Uuid,
) -> Result<Vec<AttemptAnswers>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, answers, created_at
            FROM quiz_attempts
            WHERE user_id = $1 AND quiz_id = $2
            ORDER BY created_at, id
        "#,
    )
    .bind(user_id)
    .bind(quiz_id)
    .fetch_all(executor)
    .await
}

