//! Group-wise reordering of scored candidates.
//!
//! The [`Reranker`] pipeline drives one pass: decompose each candidate's
//! query (memoized), score it with a [`CandidateScorer`], buffer per query
//! with the [`RankAggregator`], then emit each group in descending combined
//! score with a fresh 1-based rank.
//!
//! [`CandidateScorer`]: crate::scoring::CandidateScorer

pub mod aggregator;
pub mod error;
pub mod pipeline;
pub mod types;


pub use aggregator::RankAggregator;
pub use error::RerankError;
pub use pipeline::Reranker;
pub use types::{RankedGroup, RerankSummary, ScoredCandidate};
