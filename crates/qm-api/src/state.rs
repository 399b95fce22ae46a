use qm_answer::{AnswerValidator, Strictness};

use crate::ApiConfig;

#[derive(Clone, Debug)]
pub struct ApiState {
    pub validator: AnswerValidator,
    pub default_strictness: Strictness,
}

impl ApiState {
    pub fn new(config: &ApiConfig) -> Self {
        tracing::debug!(
            standard_similarity = config.standard_similarity,
            lenient_similarity = config.lenient_similarity,
            default_strictness = %config.default_strictness,
            "Answer validator configured"
        );

        Self {
            validator: AnswerValidator::new(config.validator_config()),
            default_strictness: config.default_strictness,
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}
