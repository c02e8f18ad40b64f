use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use marquee_core::error::CoreError;
use marquee_core::messages::FETCH_TRENDING_ERROR;
use marquee_pipeline::FetchError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The movie provider could not serve the query.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The metric store could not list trending searches.
    #[error("Trending searches unavailable")]
    TrendingUnavailable,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Configuration(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Upstream failures ---
            AppError::Fetch(err) => (StatusCode::BAD_GATEWAY, "FETCH_ERROR", err.message.clone()),
            AppError::TrendingUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "TRENDING_UNAVAILABLE",
                FETCH_TRENDING_ERROR.to_string(),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
