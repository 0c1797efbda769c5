//! Search-fetch collaborator seam.
//!
//! The engine does not perform network I/O; a [`SearchFetch`] implementation
//! (paginated HTTP client against the search service, in production) supplies
//! the complete candidate stream for a query before scoring begins.

pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::FetchError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSearchFetch;

use async_trait::async_trait;

use crate::record::SearchCandidate;

/// Supplies candidates for a query, already paginated and flattened.
#[async_trait]
pub trait SearchFetch: Send + Sync {
    /// Returns every candidate for `query`, in ascending original rank.
    async fn fetch(&self, query: &str) -> Result<Vec<SearchCandidate>, FetchError>;
}
