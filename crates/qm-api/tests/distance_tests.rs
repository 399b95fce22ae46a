use crate::common::{self, TestClient};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_distance_kitten_sitting() {
    let client = TestClient::new(common::app());

    let response = client
        .post_json("/v1/distance", &json!({ "a": "kitten", "b": "sitting" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["distance"], 3);
    let similarity = body["similarity"].as_f64().unwrap();
    assert!((similarity - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
    // Only reported when a bound is given
    assert!(body.get("within_threshold").is_none());
}

#[tokio::test]
async fn test_distance_with_max_edits() {
    let client = TestClient::new(common::app());

    let within = client
        .post_json(
            "/v1/distance",
            &json!({ "a": "kitten", "b": "sitting", "max_edits": 3 }),
        )
        .await;
    let body: Value = within.json();
    assert_eq!(body["within_threshold"], true);

    let beyond = client
        .post_json(
            "/v1/distance",
            &json!({ "a": "kitten", "b": "sitting", "max_edits": 2 }),
        )
        .await;
    let body: Value = beyond.json();
    assert_eq!(body["within_threshold"], false);
}

#[tokio::test]
async fn test_distance_empty_strings() {
    let client = TestClient::new(common::app());

    let response = client
        .post_json("/v1/distance", &json!({ "a": "", "b": "" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["distance"], 0);
    assert_eq!(body["similarity"], 1.0);
}

#[tokio::test]
async fn test_distance_is_case_sensitive() {
    let client = TestClient::new(common::app());

    let response = client
        .post_json("/v1/distance", &json!({ "a": "Cat", "b": "cat" }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["distance"], 1);
}

#[tokio::test]
async fn test_distance_rejects_negative_max_edits() {
    let client = TestClient::new(common::app());

    let response = client
        .post_json(
            "/v1/distance",
            &json!({ "a": "a", "b": "b", "max_edits": -1 }),
        )
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
