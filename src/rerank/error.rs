use thiserror::Error;

use crate::record::RecordError;
use crate::scoring::ScoringError;

/// Errors that abort a rerank pass.
///
/// Query-decomposition failures are deliberately absent: they skip the
/// affected group and are reported in the run summary instead.
#[derive(Debug, Error)]
pub enum RerankError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
