use thiserror::Error;

/// Errors surfaced to callers of the matching engine
///
/// Matching itself never fails; these cover the inputs and setup around it.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid issue: {0}")]
    InvalidIssue(#[from] validator::ValidationErrors),

    #[error("Unknown issue category: {0}")]
    UnknownCategory(String),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
