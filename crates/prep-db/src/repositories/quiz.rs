use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::QuizBank;

pub async fn get_bank<'e, E>(executor: E, quiz_id: Uuid) -> Result<Option<QuizBank>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, title, total_questions
            FROM quizzes
            WHERE id = $1
        "#,
    )
    .bind(quiz_id)
    .fetch_optional(executor)
    .await
}
