use axum::extract::State;
use axum::Json;

use marquee_core::metric::SearchMetric;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trending
///
/// Top searches by count, at most five.
pub async fn list_trending(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SearchMetric>>>> {
    let metrics = state
        .pipeline
        .gateway()
        .fetch_trending()
        .await
        .map_err(|_| AppError::TrendingUnavailable)?;

    Ok(Json(DataResponse { data: metrics }))
}
