//! Plain data shared by every stage of answer validation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Semantic category of a reference answer.
///
/// Drives which normalization rules apply and which late matching stages
/// are meaningful for the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    #[default]
    Text,
    Person,
    Place,
    Number,
    Date,
    Title,
    Scientific,
    MultipleChoice,
}

impl AnswerType {
    /// Every answer type, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Text,
        Self::Person,
        Self::Place,
        Self::Number,
        Self::Date,
        Self::Title,
        Self::Scientific,
        Self::MultipleChoice,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Person => "person",
            Self::Place => "place",
            Self::Number => "number",
            Self::Date => "date",
            Self::Title => "title",
            Self::Scientific => "scientific",
            Self::MultipleChoice => "multiple_choice",
        }
    }

    /// Whether a pronunciation-level match means anything for this type.
    ///
    /// Letters and digits carry no useful phonetic signal, and formulas
    /// differ in exactly the digits and symbols the encoder drops ("CO2" and
    /// "CO" share a code).
    pub const fn allows_phonetic(&self) -> bool {
        !matches!(self, Self::MultipleChoice | Self::Number | Self::Scientific)
    }

    /// Whether an edit-distance match is acceptable for this type.
    ///
    /// One wrong digit in a year, a count or a formula is a wrong answer,
    /// not a typo.
    pub const fn allows_fuzzy(&self) -> bool {
        !matches!(
            self,
            Self::MultipleChoice | Self::Number | Self::Date | Self::Scientific
        )
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key || (key == "multiplechoice" && *t == Self::MultipleChoice))
            .ok_or_else(|| ParseError::AnswerType(s.to_string()))
    }
}

/// The answer a question expects, plus the literal variants it also accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceAnswer {
    /// Canonical answer shown to the user on reveal
    pub primary: String,
    /// Additional strings that must be treated as correct
    #[serde(default)]
    pub acceptable: Vec<String>,
    pub answer_type: AnswerType,
}

impl ReferenceAnswer {
    pub fn new(primary: impl Into<String>, answer_type: AnswerType) -> Self {
        Self {
            primary: primary.into(),
            acceptable: Vec::new(),
            answer_type,
        }
    }

    pub fn with_acceptable<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acceptable.extend(variants.into_iter().map(Into::into));
        self
    }

    /// The primary answer followed by every acceptable variant.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.acceptable.iter().map(String::as_str))
    }
}

/// How permissive validation is about phonetic and fuzzy matches.
///
/// Ordered `Strict < Standard < Lenient`: a higher level accepts more.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Strict = 1,
    #[default]
    Standard = 2,
    Lenient = 3,
}

impl Strictness {
    /// All levels, strictest first.
    pub const ALL: [Self; 3] = [Self::Strict, Self::Standard, Self::Lenient];

    pub const fn level(&self) -> u8 {
        *self as u8
    }

    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Strict),
            2 => Some(Self::Standard),
            3 => Some(Self::Lenient),
            _ => None,
        }
    }

    pub fn is_stricter_than(&self, other: Self) -> bool {
        *self < other
    }

    pub fn is_more_lenient_than(&self, other: Self) -> bool {
        *self > other
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Standard => "standard",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strictness {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" | "1" => Ok(Self::Strict),
            "standard" | "2" => Ok(Self::Standard),
            "lenient" | "3" => Ok(Self::Lenient),
            _ => Err(ParseError::Strictness(s.to_string())),
        }
    }
}

/// The rule tier that decided a validation, strongest evidence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    ExactLiteral,
    NormalizedExact,
    AcceptableVariant,
    Phonetic,
    FuzzyEdit,
    NoMatch,
}

impl MatchStage {
    pub const ALL: [Self; 6] = [
        Self::ExactLiteral,
        Self::NormalizedExact,
        Self::AcceptableVariant,
        Self::Phonetic,
        Self::FuzzyEdit,
        Self::NoMatch,
    ];

    pub const fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExactLiteral => "exact_literal",
            Self::NormalizedExact => "normalized_exact",
            Self::AcceptableVariant => "acceptable_variant",
            Self::Phonetic => "phonetic",
            Self::FuzzyEdit => "fuzzy_edit",
            Self::NoMatch => "no_match",
        }
    }
}

impl fmt::Display for MatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == key)
            .ok_or_else(|| ParseError::MatchStage(s.to_string()))
    }
}

/// Outcome of a single validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_correct: bool,
    pub match_stage: MatchStage,
    /// User answer after type-specific normalization
    pub normalized_user: String,
    /// Primary reference answer after type-specific normalization
    pub normalized_reference: String,
}

impl MatchResult {
    pub(crate) fn new(
        match_stage: MatchStage,
        normalized_user: String,
        normalized_reference: String,
    ) -> Self {
        Self {
            is_correct: match_stage.is_match(),
            match_stage,
            normalized_user,
            normalized_reference,
        }
    }
}
