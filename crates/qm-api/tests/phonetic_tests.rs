use crate::common::{self, TestClient};
use axum::http::StatusCode;
use qm_api::phonetic::model::{CompareResponse, EncodeResponse};
use serde_json::{Value, json};

#[tokio::test]
async fn test_encode_single_word() {
    let client = TestClient::new(common::app());

    let response = client
        .post_json("/v1/phonetic/encode", &json!({ "text": "Smith" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: EncodeResponse = response.json();
    assert_eq!(body.code.primary, "SM0");
    assert_eq!(body.code.secondary.as_deref(), Some("SMT"));
    assert_eq!(body.words, vec![body.code.clone()]);
}

#[tokio::test]
async fn test_encode_phrase_per_word() {
    let client = TestClient::new(common::app());

    let response = client
        .post_json("/v1/phonetic/encode", &json!({ "text": "Albert Einstein" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: EncodeResponse = response.json();
    assert_eq!(body.words.len(), 2);
    assert_eq!(body.words[1].primary, "ANST");
    assert!(body.code.primary.len() <= 4);
}

#[tokio::test]
async fn test_encode_without_letters_is_empty() {
    let client = TestClient::new(common::app());

    let response = client
        .post_json("/v1/phonetic/encode", &json!({ "text": "1776" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["code"]["primary"], "");
    assert_eq!(body["code"]["secondary"], Value::Null);
}

#[tokio::test]
async fn test_compare() {
    let client = TestClient::new(common::app());

    let response = client
        .post_json("/v1/phonetic/compare", &json!({ "a": "Smith", "b": "Smyth" }))
        .await;
    response.assert_status(StatusCode::OK);
    let body: CompareResponse = response.json();
    assert!(body.sounds_alike);
    assert_eq!(body.a.primary, body.b.primary);

    let response = client
        .post_json("/v1/phonetic/compare", &json!({ "a": "Smith", "b": "Jones" }))
        .await;
    let body: CompareResponse = response.json();
    assert!(!body.sounds_alike);
}

#[tokio::test]
async fn test_compare_empty_never_alike() {
    let client = TestClient::new(common::app());

    let response = client
        .post_json("/v1/phonetic/compare", &json!({ "a": "", "b": "" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: CompareResponse = response.json();
    assert!(!body.sounds_alike);
}

#[tokio::test]
async fn test_encode_rejects_oversized_text() {
    let client = TestClient::new(common::app());

    let response = client
        .post_json("/v1/phonetic/encode", &json!({ "text": "x".repeat(513) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
