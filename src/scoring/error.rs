use thiserror::Error;

/// Errors surfaced by pluggable [`CandidateScorer`](super::CandidateScorer)
/// implementations. The built-in string-matching scorer never fails; this
/// exists for backends that delegate judgment to an external model.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("scoring backend failed: {reason}")]
    Backend { reason: String },
}
