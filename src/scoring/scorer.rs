//! Pluggable scoring contract and the default string-matching backend.

use crate::query::QueryComponents;
use crate::record::SearchCandidate;

use super::alignment::AlignmentScorer;
use super::error::ScoringError;
use super::penalty::PenaltyScorer;
use super::types::{MatchOutcome, PenaltyOutcome};

/// Scores one candidate against its query's decomposed components.
///
/// Both passes are exposed separately so callers can trace match and
/// penalty contributions independently. Implementations must be pure with
/// respect to their inputs: the pipeline may score query groups
/// concurrently.
pub trait CandidateScorer: Send + Sync {
    /// Positive alignment pass.
    fn score_match(
        &self,
        components: &QueryComponents,
        candidate: &SearchCandidate,
    ) -> Result<MatchOutcome, ScoringError>;

    /// Negative absence pass.
    fn score_penalty(
        &self,
        components: &QueryComponents,
        candidate: &SearchCandidate,
    ) -> Result<PenaltyOutcome, ScoringError>;
}

/// Deterministic scorer built on normalized substring matching.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringMatchScorer {
    alignment: AlignmentScorer,
    penalty: PenaltyScorer,
}

impl StringMatchScorer {
    pub fn new() -> Self {
        Self {
            alignment: AlignmentScorer::new(),
            penalty: PenaltyScorer::new(),
        }
    }
}

impl CandidateScorer for StringMatchScorer {
    fn score_match(
        &self,
        components: &QueryComponents,
        candidate: &SearchCandidate,
    ) -> Result<MatchOutcome, ScoringError> {
        Ok(self.alignment.score(components, candidate))
    }

    fn score_penalty(
        &self,
        components: &QueryComponents,
        candidate: &SearchCandidate,
    ) -> Result<PenaltyOutcome, ScoringError> {
        Ok(self.penalty.score(components, candidate))
    }
}
