//! Smoke Tests: API Reachability
//!
//! These tests validate that the external cats API server is running and
//! answering on its documented port. All other e2e tests depend on these
//! passing.

#![cfg(feature = "smoke")]

use cats_client::{ApiResponse, ApiStatus, Cat};
use cats_env_tests::env::ApiConnection;

/// Helper to create an API connection for tests.
async fn api() -> ApiConnection {
    ApiConnection::new()
        .await
        .expect("Failed to reach the cats API server - ensure it is running on localhost:3000")
}

#[tokio::test]
async fn test_cats_endpoint_healthy() {
    let api = api().await;

    api.check_api_health()
        .await
        .expect("GET /api/v1/cats should respond with a success status");
}

#[tokio::test]
async fn test_list_cats_returns_ok_envelope() {
    let api = api().await;

    let body = api
        .client()
        .list_cats()
        .await
        .expect("Listing cats should succeed");

    assert_eq!(body.status, ApiStatus::Ok, "Envelope status should be OK");
}

#[tokio::test]
async fn test_list_cats_matches_schema() {
    let api = api().await;

    let response = api
        .client()
        .raw_list_cats()
        .await
        .expect("Network request should succeed");

    assert_eq!(response.status().as_u16(), 200);

    let body: ApiResponse<Vec<Cat>> = response
        .json()
        .await
        .expect("List body should deserialize into the cat schema");

    for cat in &body.data {
        assert!(!cat.id.is_empty(), "Every cat should carry a server id");
        assert!(!cat.name.is_empty(), "Every cat should carry a name");
    }
}
