//! Staged answer validation.
//!
//! A user answer is checked against the reference answer through a fixed
//! sequence of increasingly permissive stages; the first stage that accepts
//! decides the result:
//!
//! 1. [`MatchStage::ExactLiteral`]: trimmed, case-folded text equals the primary answer
//! 2. [`MatchStage::NormalizedExact`]: type-normalized text equals the normalized primary
//! 3. [`MatchStage::AcceptableVariant`]: normalized text equals a normalized acceptable variant
//! 4. [`MatchStage::Phonetic`]: every word sounds like the matching word of the primary or a variant
//! 5. [`MatchStage::FuzzyEdit`]: similarity to the primary or a variant reaches the strictness threshold
//!
//! Stages 4 and 5 never run under [`Strictness::Strict`], and are skipped for
//! answer types where they make no sense (see [`AnswerType::allows_phonetic`]
//! and [`AnswerType::allows_fuzzy`]).

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::{
    distance::similarity,
    normalize::normalize,
    phonetic::encode,
    types::{AnswerType, MatchResult, MatchStage, ReferenceAnswer, Strictness},
};

/// Tunable thresholds for the fuzzy stage.
///
/// Similarity is length-normalized, so the number of edits tolerated grows
/// with the answer: at 0.85 a 7-letter answer allows one edit, a 20-letter
/// answer three.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Minimum similarity accepted under [`Strictness::Standard`]
    pub standard_similarity: f64,
    /// Minimum similarity accepted under [`Strictness::Lenient`]
    pub lenient_similarity: f64,
}

impl ValidatorConfig {
    pub const DEFAULT_STANDARD_SIMILARITY: f64 = 0.85;
    pub const DEFAULT_LENIENT_SIMILARITY: f64 = 0.75;

    /// Similarity required by the fuzzy stage, or `None` when it is disabled.
    pub const fn threshold(&self, strictness: Strictness) -> Option<f64> {
        match strictness {
            Strictness::Strict => None,
            Strictness::Standard => Some(self.standard_similarity),
            Strictness::Lenient => Some(self.lenient_similarity),
        }
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            standard_similarity: Self::DEFAULT_STANDARD_SIMILARITY,
            lenient_similarity: Self::DEFAULT_LENIENT_SIMILARITY,
        }
    }
}

/// Decides whether a user answer matches a reference answer.
///
/// Holds only its configuration; a single instance can be shared across
/// threads and reused for any number of validations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnswerValidator {
    config: ValidatorConfig,
}

impl AnswerValidator {
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate `user_answer` against `reference` at the given strictness.
    ///
    /// Never fails: empty or garbage input simply yields
    /// [`MatchStage::NoMatch`]. The result always carries both normalized
    /// forms, whichever stage decided.
    #[instrument(
        level = "debug",
        skip_all,
        fields(answer_type = %reference.answer_type, %strictness)
    )]
    pub fn validate(
        &self,
        user_answer: &str,
        reference: &ReferenceAnswer,
        strictness: Strictness,
    ) -> MatchResult {
        let answer_type = reference.answer_type;
        let normalized_user = normalize(user_answer, answer_type);
        let normalized_reference = normalize(&reference.primary, answer_type);

        let stage = self.decide(
            user_answer,
            reference,
            strictness,
            &normalized_user,
            &normalized_reference,
        );
        debug!(stage = %stage, "answer validated");

        MatchResult::new(stage, normalized_user, normalized_reference)
    }

    fn decide(
        &self,
        user_answer: &str,
        reference: &ReferenceAnswer,
        strictness: Strictness,
        normalized_user: &str,
        normalized_reference: &str,
    ) -> MatchStage {
        let literal = user_answer.trim().to_lowercase();
        if literal.is_empty() {
            return MatchStage::NoMatch;
        }
        if literal == reference.primary.trim().to_lowercase() {
            return MatchStage::ExactLiteral;
        }

        if normalized_user.is_empty() {
            trace!("answer normalized to nothing");
            return MatchStage::NoMatch;
        }
        if normalized_user == normalized_reference {
            return MatchStage::NormalizedExact;
        }

        let answer_type = reference.answer_type;
        let variants: Vec<String> = reference
            .acceptable
            .iter()
            .map(|v| normalize(v, answer_type))
            .filter(|v| !v.is_empty())
            .collect();
        if variants.iter().any(|v| v == normalized_user) {
            return MatchStage::AcceptableVariant;
        }

        // Late stages compare against the primary and every variant
        let targets: Vec<&str> = std::iter::once(normalized_reference)
            .filter(|r| !r.is_empty())
            .chain(variants.iter().map(String::as_str))
            .collect();

        if self.phonetic_applies(answer_type, strictness)
            && targets.iter().any(|t| words_sound_alike(normalized_user, t))
        {
            return MatchStage::Phonetic;
        }

        if let Some(threshold) = self.fuzzy_threshold(answer_type, strictness) {
            let best = targets
                .iter()
                .map(|t| similarity(normalized_user, t))
                .fold(0.0_f64, f64::max);
            trace!(best, threshold, "fuzzy similarity");
            if best >= threshold {
                return MatchStage::FuzzyEdit;
            }
        }

        MatchStage::NoMatch
    }

    fn phonetic_applies(&self, answer_type: AnswerType, strictness: Strictness) -> bool {
        if strictness == Strictness::Strict || !answer_type.allows_phonetic() {
            trace!("phonetic stage skipped");
            return false;
        }
        true
    }

    fn fuzzy_threshold(&self, answer_type: AnswerType, strictness: Strictness) -> Option<f64> {
        if !answer_type.allows_fuzzy() {
            trace!("fuzzy stage skipped");
            return None;
        }
        self.config.threshold(strictness)
    }
}

/// Word-by-word phonetic comparison.
///
/// Codes are capped at four characters, so encoding a whole phrase at once
/// would make "united states" and "united kingdom" indistinguishable.
fn words_sound_alike(a: &str, b: &str) -> bool {
    let a: Vec<&str> = a.split_whitespace().collect();
    let b: Vec<&str> = b.split_whitespace().collect();

    !a.is_empty() && a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| word_sounds_alike(x, y))
}

/// Digits and symbols are dropped by the encoder, so they must agree
/// literally; only the letters are compared by sound. Words without letters
/// ("2", "1776") therefore match only themselves.
fn word_sounds_alike(a: &str, b: &str) -> bool {
    let non_letters = |s: &str| {
        s.chars()
            .filter(|c| !c.is_ascii_alphabetic())
            .collect::<String>()
    };
    if non_letters(a) != non_letters(b) {
        return false;
    }

    let (code_a, code_b) = (encode(a), encode(b));
    if code_a.is_empty() && code_b.is_empty() {
        return true;
    }
    code_a.matches(&code_b)
}

/// Validate with the default [`ValidatorConfig`].
pub fn validate(
    user_answer: &str,
    reference: &ReferenceAnswer,
    strictness: Strictness,
) -> MatchResult {
    AnswerValidator::default().validate(user_answer, reference, strictness)
}
