//! In-memory search-fetch backend for tests.

use async_trait::async_trait;

use crate::record::SearchCandidate;

use super::FetchError;
use super::SearchFetch;

/// Serves canned candidates; ranks are assigned in insertion order.
#[derive(Debug, Default)]
pub struct MockSearchFetch {
    candidates: Vec<SearchCandidate>,
}

impl MockSearchFetch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate for `query` with the next rank for that query.
    pub fn add(&mut self, query: &str, title: &str, snippet: &str) {
        let rank = self
            .candidates
            .iter()
            .filter(|c| c.query == query)
            .count() as u32
            + 1;

        self.candidates.push(SearchCandidate {
            query: query.to_string(),
            rank,
            title: title.to_string(),
            link: String::new(),
            snippet: snippet.to_string(),
            metatags_title: String::new(),
            subject: String::new(),
            creationdate: String::new(),
        });
    }
}

#[async_trait]
impl SearchFetch for MockSearchFetch {
    async fn fetch(&self, query: &str) -> Result<Vec<SearchCandidate>, FetchError> {
        Ok(self
            .candidates
            .iter()
            .filter(|c| c.query == query)
            .cloned()
            .collect())
    }
}
