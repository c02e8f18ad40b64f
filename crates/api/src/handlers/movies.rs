//! Handlers for one-shot movie lookups.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use marquee_core::error::CoreError;
use marquee_core::movie::Movie;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /movies`.
#[derive(Debug, Deserialize, Validate)]
pub struct MovieSearchParams {
    /// Empty or absent lists popular movies.
    #[serde(default)]
    #[validate(length(max = 200))]
    pub query: String,
}

/// GET /api/v1/movies?query=
///
/// Resolves the query exactly as a debounced live search would, including
/// the metric record for a successful non-empty search.
pub async fn list_movies(
    State(state): State<AppState>,
    params: Result<Query<MovieSearchParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    params
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let resolution = state.pipeline.resolve_movies(&params.query).await;
    let movies = resolution.outcome?;

    Ok(Json(DataResponse { data: movies }))
}
