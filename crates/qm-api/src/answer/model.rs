use qm_answer::{AnswerType, ReferenceAnswer, Strictness};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /v1/answers/validate`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ValidateRequest {
    /// Raw answer as typed or transcribed; may be empty
    #[validate(length(max = 512))]
    pub user_answer: String,
    #[validate(nested)]
    pub reference: ReferencePayload,
    /// Falls back to the server's default strictness when absent
    #[serde(default)]
    pub strictness: Option<Strictness>,
}

/// Reference answer as sent by clients
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReferencePayload {
    #[validate(length(min = 1, max = 512))]
    pub primary: String,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub acceptable: Vec<String>,
    #[serde(default)]
    pub answer_type: AnswerType,
}

impl From<ReferencePayload> for ReferenceAnswer {
    fn from(payload: ReferencePayload) -> Self {
        Self::new(payload.primary, payload.answer_type).with_acceptable(payload.acceptable)
    }
}

/// Body of `POST /v1/answers/normalize`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NormalizeRequest {
    #[validate(length(max = 512))]
    pub text: String,
    #[serde(default)]
    pub answer_type: AnswerType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeResponse {
    pub normalized: String,
    pub answer_type: AnswerType,
}
