//! Fixed-score scorer for pipeline tests.

use crate::query::QueryComponents;
use crate::record::SearchCandidate;

use super::error::ScoringError;
use super::scorer::CandidateScorer;
use super::types::{MatchOutcome, PenaltyOutcome};

/// Returns the same match/penalty scores for every candidate.
#[derive(Debug, Clone, Copy)]
pub struct MockScorer {
    pub match_score: f64,
    pub penalty_score: f64,
}

impl MockScorer {
    pub fn new(match_score: f64, penalty_score: f64) -> Self {
        Self {
            match_score,
            penalty_score,
        }
    }
}

impl CandidateScorer for MockScorer {
    fn score_match(
        &self,
        _components: &QueryComponents,
        _candidate: &SearchCandidate,
    ) -> Result<MatchOutcome, ScoringError> {
        Ok(MatchOutcome {
            score: self.match_score,
            rationale: "mock match".to_string(),
        })
    }

    fn score_penalty(
        &self,
        _components: &QueryComponents,
        _candidate: &SearchCandidate,
    ) -> Result<PenaltyOutcome, ScoringError> {
        Ok(PenaltyOutcome {
            score: self.penalty_score,
            rationale: "mock penalty".to_string(),
        })
    }
}
