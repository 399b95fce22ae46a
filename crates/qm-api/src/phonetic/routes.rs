use axum::{Json, Router, routing::post};
use qm_answer::phonetic::{encode, encode_words};
use validator::Validate;

use crate::{ApiState, error::ApiError};

use super::model::{CompareRequest, CompareResponse, EncodeRequest, EncodeResponse};

/// Create the phonetic routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/phonetic/encode", post(encode_text))
        .route("/phonetic/compare", post(compare_texts))
}

async fn encode_text(Json(payload): Json<EncodeRequest>) -> Result<Json<EncodeResponse>, ApiError> {
    payload.validate()?;

    Ok(Json(EncodeResponse {
        code: encode(&payload.text),
        words: encode_words(&payload.text),
    }))
}

/// Compare two texts as whole phrases
async fn compare_texts(
    Json(payload): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    payload.validate()?;

    let a = encode(&payload.a);
    let b = encode(&payload.b);

    Ok(Json(CompareResponse {
        sounds_alike: a.matches(&b),
        a,
        b,
    }))
}
