//! Answer validation engine for quiz and trivia questions.
//!
//! Decides whether a free-form typed or transcribed answer should be
//! accepted against a reference answer, and reports which rule accepted it.
//! Noise from speech-to-text and typing is absorbed by type-aware
//! normalization, Double Metaphone phonetic matching and Levenshtein
//! similarity, each gated by a [`Strictness`] level.
//!
//! Everything in this crate is synchronous and side-effect free.
//!
//! ```
//! use qm_answer::{AnswerType, MatchStage, ReferenceAnswer, Strictness, validate};
//!
//! let reference = ReferenceAnswer::new("Albert Einstein", AnswerType::Person)
//!     .with_acceptable(["Einstein"]);
//!
//! let result = validate("Einstein", &reference, Strictness::Standard);
//! assert!(result.is_correct);
//! assert_eq!(result.match_stage, MatchStage::AcceptableVariant);
//! ```

pub mod distance;
pub mod error;
pub mod normalize;
pub mod phonetic;
pub mod types;
pub mod validator;

pub use distance::{distance, similarity, similarity_from_distance, within_threshold};
pub use error::ParseError;
pub use normalize::normalize;
pub use phonetic::{MetaphoneCode, encode, sounds_alike};
pub use types::{AnswerType, MatchResult, MatchStage, ReferenceAnswer, Strictness};
pub use validator::{AnswerValidator, ValidatorConfig, validate};
