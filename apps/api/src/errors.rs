use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ats::FetchError;

/// Message returned to callers for any failure in the matching pipeline.
/// Details stay in the server log.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch jobs";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Job fetch failed: {0}")]
    JobsUnavailable(#[from] FetchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::JobsUnavailable(e) => tracing::error!("Job fetch failed: {e:?}"),
        }

        let body = Json(json!({ "error": FETCH_FAILURE_MESSAGE }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
