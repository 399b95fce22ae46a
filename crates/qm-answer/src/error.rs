use thiserror::Error;

/// Error returned when parsing one of the engine's enums from a string.
///
/// Validation itself never fails; this only shows up at the edges where
/// answer types and strictness levels are read from configuration or
/// request payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown answer type: '{0}'")]
    AnswerType(String),
    #[error("Unknown strictness: '{0}'. Expected one of: strict, standard, lenient")]
    Strictness(String),
    #[error("Unknown match stage: '{0}'")]
    MatchStage(String),
}
