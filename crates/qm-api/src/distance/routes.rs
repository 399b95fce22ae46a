use axum::{Json, Router, routing::post};
use qm_answer::distance::{distance, similarity_from_distance, within_threshold};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{ApiState, error::ApiError};

/// Create the distance routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/distance", post(edit_distance))
}

#[derive(Debug, Deserialize, Validate)]
struct DistanceRequest {
    #[validate(length(max = 512))]
    a: String,
    #[validate(length(max = 512))]
    b: String,
    /// When set, the response also says whether `a` is within this many edits of `b`
    #[serde(default)]
    max_edits: Option<usize>,
}

#[derive(Debug, Serialize)]
struct DistanceResponse {
    distance: usize,
    similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    within_threshold: Option<bool>,
}

/// Levenshtein distance between two raw strings, case-sensitive
async fn edit_distance(
    Json(payload): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, ApiError> {
    payload.validate()?;

    let edits = distance(&payload.a, &payload.b);

    Ok(Json(DistanceResponse {
        distance: edits,
        similarity: similarity_from_distance(edits, &payload.a, &payload.b),
        within_threshold: payload
            .max_edits
            .map(|max| within_threshold(&payload.a, &payload.b, max)),
    }))
}
