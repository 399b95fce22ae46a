use qm_answer::MetaphoneCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EncodeRequest {
    #[validate(length(max = 512))]
    pub text: String,
}

/// Code of the whole text plus one code per word, which is what the
/// validator compares for multi-word answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeResponse {
    pub code: MetaphoneCode,
    pub words: Vec<MetaphoneCode>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CompareRequest {
    #[validate(length(max = 512))]
    pub a: String,
    #[validate(length(max = 512))]
    pub b: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub sounds_alike: bool,
    pub a: MetaphoneCode,
    pub b: MetaphoneCode,
}
