use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::assembler::AssembleError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Readiness data is temporarily unavailable")]
    DataUnavailable(#[source] sqlx::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<AssembleError> for ApiError {
    fn from(err: AssembleError) -> Self {
        match err {
            AssembleError::DataUnavailable(source) => Self::DataUnavailable(source),
            AssembleError::QuizNotFound(quiz_id) => Self::NotFound(format!("quiz {quiz_id}")),
        }
    }
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::DataUnavailable(source) = &self {
            tracing::error!(error = %source, "Failed to load readiness data");
        }

        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
