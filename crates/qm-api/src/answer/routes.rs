use axum::{Json, Router, extract::State, routing::post};
use qm_answer::{MatchResult, ReferenceAnswer, normalize};
use validator::Validate;

use crate::{ApiState, error::ApiError, metrics, validation::validate_variants};

use super::model::{NormalizeRequest, NormalizeResponse, ValidateRequest};

/// Create the answer routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/answers/validate", post(validate_answer))
        .route("/answers/normalize", post(normalize_answer))
}

/// Decide whether a user answer matches the reference
async fn validate_answer(
    State(state): State<ApiState>,
    Json(payload): Json<ValidateRequest>,
) -> Result<Json<MatchResult>, ApiError> {
    payload.validate()?;
    validate_variants(&payload.reference.acceptable)?;

    let strictness = payload.strictness.unwrap_or(state.default_strictness);
    let reference = ReferenceAnswer::from(payload.reference);

    let result = state
        .validator
        .validate(&payload.user_answer, &reference, strictness);

    metrics::record_validation(result.match_stage, reference.answer_type, strictness);
    tracing::info!(
        answer_type = %reference.answer_type,
        %strictness,
        stage = %result.match_stage,
        correct = result.is_correct,
        "Answer validated"
    );

    Ok(Json(result))
}

/// Show the normalized form the validator compares
async fn normalize_answer(
    Json(payload): Json<NormalizeRequest>,
) -> Result<Json<NormalizeResponse>, ApiError> {
    payload.validate()?;

    Ok(Json(NormalizeResponse {
        normalized: normalize(&payload.text, payload.answer_type),
        answer_type: payload.answer_type,
    }))
}
