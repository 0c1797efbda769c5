//! Candidate scoring against decomposed query components.
//!
//! Two independent passes produce one combined score per candidate:
//!
//! - [`AlignmentScorer`] adds `2 × weight` for every query component found
//!   (after normalization) as a substring of a metadata field. A component
//!   matching several fields adds once per field.
//! - [`PenaltyScorer`] subtracts `weight` for every non-empty component
//!   absent from all metadata fields.
//!
//! Both passes share one weight table (company_name 8, report_type 4,
//! year 2, country 1) and emit a human-readable rationale alongside the
//! number.
//!
//! [`CandidateScorer`] is the seam for alternative judgment backends (the
//! upstream system has a generative-model variant); [`StringMatchScorer`]
//! is the deterministic implementation and never fails.

pub mod alignment;
pub mod error;
pub mod penalty;
pub mod scorer;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use alignment::AlignmentScorer;
pub use error::ScoringError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockScorer;
pub use penalty::PenaltyScorer;
pub use scorer::{CandidateScorer, StringMatchScorer};
pub use types::{MATCH_MULTIPLIER, MatchOutcome, PenaltyOutcome, component_weight, weight_sum};
