//! Docrank library crate (used by the binary and integration tests).
//!
//! A reranking engine for document-search results: candidates fetched for a
//! free-text query are re-ordered by how well their metadata aligns with
//! structured components extracted from the query.
//!
//! # Public API Surface
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Run configuration
//! - [`SearchCandidate`], [`ScoredRecord`] - JSONL record shapes
//! - [`QueryDecomposer`], [`QueryComponents`] - Query decomposition
//! - [`Reranker`], [`RankAggregator`] - The rerank pipeline
//!
//! ## Scoring
//! - [`AlignmentScorer`], [`PenaltyScorer`] - The two deterministic passes
//! - [`CandidateScorer`], [`StringMatchScorer`] - Pluggable scoring contract
//!
//! ## Collaborators
//! External I/O (search fetch, topic classification) stays behind async
//! traits; the engine itself is synchronous and pure.
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod classify;
pub mod config;
pub mod constants;
pub mod fetch;
pub mod normalize;
pub mod query;
pub mod record;
pub mod rerank;
pub mod scoring;

pub use classify::{ClassifyError, Judgment, TopicClassifier};
#[cfg(any(test, feature = "mock"))]
pub use classify::MockTopicClassifier;

pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_CUTOFF_K, DEFAULT_QUERY_CACHE_CAPACITY};

pub use fetch::{FetchError, SearchFetch};
#[cfg(any(test, feature = "mock"))]
pub use fetch::MockSearchFetch;

pub use normalize::{normalize, normalize_opt};
pub use query::{Component, DecomposeError, QueryComponents, QueryDecomposer};
pub use record::{RecordError, ScoredRecord, SearchCandidate, read_candidates, write_records};
pub use rerank::{RankAggregator, RankedGroup, RerankError, RerankSummary, Reranker, ScoredCandidate};

#[cfg(any(test, feature = "mock"))]
pub use scoring::MockScorer;
pub use scoring::{
    AlignmentScorer, CandidateScorer, MATCH_MULTIPLIER, MatchOutcome, PenaltyOutcome,
    PenaltyScorer, ScoringError, StringMatchScorer, component_weight, weight_sum,
};
