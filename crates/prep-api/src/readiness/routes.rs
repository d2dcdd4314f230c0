use std::time::Instant;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, State},
    routing::{get, post},
};
use prep_score::{
    Metric, MetricExplanation, ReadinessResult, ScoreInput, compute_readiness_now, explain,
    explain_all,
};
use uuid::Uuid;

use super::model::ReadinessReport;
use crate::{ApiState, error::ApiError, metrics, validation};

/// Create the readiness routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/readiness/compute",
            post(compute).layer(DefaultBodyLimit::max(validation::MAX_COMPUTE_BODY_BYTES)),
        )
        .route("/readiness/metrics", get(list_metrics))
        .route("/readiness/metrics/{metric}", get(get_metric))
        .route("/users/{user_id}/readiness/{quiz_id}", get(get_user_readiness))
}

/// Score a caller-supplied answer history against the current time
async fn compute(Json(input): Json<ScoreInput>) -> Result<Json<ReadinessResult>, ApiError> {
    validation::validate_score_input(&input)?;

    Ok(Json(score(&input)))
}

/// Score a user's stored history on a quiz
async fn get_user_readiness(
    State(state): State<ApiState>,
    Path((user_id, quiz_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ReadinessReport>, ApiError> {
    let input = match state.assembler.assemble(user_id, quiz_id).await {
        Ok(input) => {
            metrics::record_assembly(true);
            input
        }
        Err(err) => {
            metrics::record_assembly(false);
            return Err(err.into());
        }
    };

    let result = score(&input);
    tracing::info!(
        %user_id,
        %quiz_id,
        score = result.score,
        unique_questions = result.unique_questions,
        "Readiness computed"
    );

    Ok(Json(ReadinessReport::from(result)))
}

async fn list_metrics() -> Json<[MetricExplanation; 5]> {
    Json(explain_all())
}

async fn get_metric(Path(metric): Path<String>) -> Result<Json<MetricExplanation>, ApiError> {
    let metric: Metric = metric
        .parse()
        .map_err(|e: prep_score::explainer::UnknownMetric| ApiError::NotFound(e.to_string()))?;

    Ok(Json(explain(metric)))
}

fn score(input: &ScoreInput) -> ReadinessResult {
    let start = Instant::now();
    let result = compute_readiness_now(input);
    metrics::record_readiness(result.score, start.elapsed().as_secs_f64());

    tracing::debug!(
        total_answers = result.total_answers,
        score = result.score,
        reliability = result.reliability,
        "Scored answer history"
    );

    result
}
