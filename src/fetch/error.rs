use thiserror::Error;

/// Errors from a search-fetch backend.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("search request failed for query '{query}': {message}")]
    RequestFailed { query: String, message: String },

    #[error("search response could not be decoded: {message}")]
    DecodeFailed { message: String },
}
