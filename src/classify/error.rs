use thiserror::Error;

/// Errors from a classification backend.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classification backend failed: {message}")]
    Backend { message: String },

    #[error("classification response could not be decoded: {message}")]
    DecodeFailed { message: String },
}
