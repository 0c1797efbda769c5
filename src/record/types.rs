use serde::{Deserialize, Serialize};

use super::METADATA_FIELD_COUNT;

/// One search result as delivered by the search-fetch collaborator.
///
/// Immutable once received. `query` is the originating free-text query and
/// `rank` the position the search service assigned. Metadata fields that are
/// missing or null in the input deserialize as empty strings; the normalizer
/// treats them the same either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCandidate {
    /// Originating free-text query.
    pub query: String,

    /// 1-based rank assigned by the search service.
    pub rank: u32,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub snippet: String,

    /// Secondary title taken from document metatags.
    #[serde(default)]
    pub metatags_title: String,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub creationdate: String,
}

impl SearchCandidate {
    /// Returns `(field name, value)` pairs for every metadata field, in a
    /// fixed order. Scorers iterate this instead of naming fields.
    pub fn metadata_fields(&self) -> [(&'static str, &str); METADATA_FIELD_COUNT] {
        [
            ("title", self.title.as_str()),
            ("link", self.link.as_str()),
            ("snippet", self.snippet.as_str()),
            ("metatags_title", self.metatags_title.as_str()),
            ("subject", self.subject.as_str()),
            ("creationdate", self.creationdate.as_str()),
        ]
    }
}

/// Output record: the input candidate plus scoring fields and the new rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub candidate: SearchCandidate,

    pub match_score: f64,
    pub match_rationale: String,
    pub penalty_score: f64,
    pub penalty_rationale: String,

    /// Combined score: `match_score + penalty_score`.
    pub score: f64,

    /// 1-based position within the query group after reordering.
    pub new_rank: u32,
}
