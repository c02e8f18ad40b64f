//! HTTP-level integration tests for `GET /api/v1/movies`.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, wait_for_metric, FailingStore, StubSource};
use marquee_core::messages::{FETCH_MOVIES_ERROR, PROVIDER_FAILURE_FALLBACK};
use marquee_core::movie::Movie;
use marquee_db::InMemoryMetricStore;
use marquee_tmdb::TmdbApiError;

// ---------------------------------------------------------------------------
// Test: no query lists popular movies and records nothing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_query_lists_popular_movies() {
    let store = Arc::new(InMemoryMetricStore::new());
    let source = Arc::new(StubSource::new());
    let app = build_test_app(store.clone(), source.clone());

    let response = get(app, "/api/v1/movies").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"][0]["title"], "discover");
    assert_eq!(source.calls(), [""]);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(store.is_empty().await);
}

// ---------------------------------------------------------------------------
// Test: keyword search returns provider results and records the first match
// ---------------------------------------------------------------------------

#[tokio::test]
async fn keyword_search_returns_results_and_records_metric() {
    let store = Arc::new(InMemoryMetricStore::new());
    let source = Arc::new(StubSource::new().movies(
        "the matrix",
        vec![
            Movie::new(603, "The Matrix", Some("/matrix.jpg")),
            Movie::new(604, "The Matrix Reloaded", None),
        ],
    ));
    let app = build_test_app(store.clone(), source.clone());

    let response = get(app, "/api/v1/movies?query=the%20matrix").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], 603);
    assert_eq!(source.calls(), ["the matrix"]);

    let metric = wait_for_metric(&store, "the matrix").await;
    assert_eq!(metric.count, 1);
    assert_eq!(metric.movie_id, 603);
    assert_eq!(metric.poster_url, "https://image.tmdb.org/t/p/w500/matrix.jpg");
}

// ---------------------------------------------------------------------------
// Test: empty result list is a success
// ---------------------------------------------------------------------------

#[tokio::test]
async fn no_matches_is_an_empty_list() {
    let store = Arc::new(InMemoryMetricStore::new());
    let app = build_test_app(
        store.clone(),
        Arc::new(StubSource::new().movies("qwxz", vec![])),
    );

    let response = get(app, "/api/v1/movies?query=qwxz").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(store.is_empty().await);
}

// ---------------------------------------------------------------------------
// Test: provider-signalled failure surfaces the provider message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn provider_failure_returns_bad_gateway_with_message() {
    let source = StubSource::new().fail("dune", || TmdbApiError::ProviderFailure {
        status: 200,
        message: Some("Movie not found!".into()),
    });
    let app = build_test_app(Arc::new(InMemoryMetricStore::new()), Arc::new(source));

    let response = get(app, "/api/v1/movies?query=dune").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FETCH_ERROR");
    assert_eq!(json["error"], "Movie not found!");
}

#[tokio::test]
async fn provider_failure_without_message_uses_fallback() {
    let source = StubSource::new().fail("dune", || TmdbApiError::ProviderFailure {
        status: 401,
        message: None,
    });
    let app = build_test_app(Arc::new(InMemoryMetricStore::new()), Arc::new(source));

    let json = body_json(get(app, "/api/v1/movies?query=dune").await).await;
    assert_eq!(json["error"], PROVIDER_FAILURE_FALLBACK);
}

#[tokio::test]
async fn transport_failure_uses_generic_message() {
    let source = StubSource::new().fail("", || TmdbApiError::ApiError {
        status: 503,
        body: "upstream down".into(),
    });
    let app = build_test_app(Arc::new(InMemoryMetricStore::new()), Arc::new(source));

    let response = get(app, "/api/v1/movies?query=").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["error"], FETCH_MOVIES_ERROR);
}

// ---------------------------------------------------------------------------
// Test: a broken metric store never affects movie results
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_does_not_affect_search() {
    let app = build_test_app(Arc::new(FailingStore), Arc::new(StubSource::new()));

    let response = get(app, "/api/v1/movies?query=alien").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"][0]["title"], "alien");
}

// ---------------------------------------------------------------------------
// Test: overlong query is rejected before reaching the provider
// ---------------------------------------------------------------------------

#[tokio::test]
async fn overlong_query_is_rejected() {
    let source = Arc::new(StubSource::new());
    let app = build_test_app(Arc::new(InMemoryMetricStore::new()), source.clone());

    let uri = format!("/api/v1/movies?query={}", "a".repeat(201));
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(source.calls().is_empty());
}
