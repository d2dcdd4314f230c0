use std::sync::Arc;

use sqlx::PgPool;

use crate::assembler::{AttemptSource, PgAttemptSource, ScoreInputAssembler};

#[derive(Clone, Debug)]
pub struct ApiState {
    pub assembler: ScoreInputAssembler,
}

impl ApiState {
    /// State reading attempts from PostgreSQL.
    pub fn new(pool: PgPool) -> Self {
        Self::with_source(Arc::new(PgAttemptSource::new(pool)))
    }

    /// State reading attempts from any [`AttemptSource`].
    pub fn with_source(source: Arc<dyn AttemptSource>) -> Self {
        Self {
            assembler: ScoreInputAssembler::new(source),
        }
    }
}
