use crate::query::DecomposeError;
use crate::record::{ScoredRecord, SearchCandidate};
use crate::scoring::{MatchOutcome, PenaltyOutcome};

/// A candidate with both scoring passes applied, before rank assignment.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: SearchCandidate,
    pub match_outcome: MatchOutcome,
    pub penalty_outcome: PenaltyOutcome,
}

impl ScoredCandidate {
    /// Combined score: match plus (already negative) penalty.
    #[inline]
    pub fn combined_score(&self) -> f64 {
        self.match_outcome.score + self.penalty_outcome.score
    }

    /// Converts into an output record once the new rank is known.
    pub fn into_record(self, new_rank: u32) -> ScoredRecord {
        let score = self.combined_score();
        ScoredRecord {
            candidate: self.candidate,
            match_score: self.match_outcome.score,
            match_rationale: self.match_outcome.rationale,
            penalty_score: self.penalty_outcome.score,
            penalty_rationale: self.penalty_outcome.rationale,
            score,
            new_rank,
        }
    }
}

/// One query's candidates after reordering.
///
/// `records` is ordered by descending combined score; `new_rank` is the
/// 1-based position within this sequence.
#[derive(Debug, Clone)]
pub struct RankedGroup {
    pub query: String,
    pub records: Vec<ScoredRecord>,
}

impl RankedGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Counters for one rerank pass.
#[derive(Debug, Clone, Default)]
pub struct RerankSummary {
    /// Candidates read from the input.
    pub candidates_seen: usize,
    /// Candidates scored and emitted.
    pub candidates_scored: usize,
    /// Candidates excluded because their original rank exceeded the cutoff.
    pub beyond_cutoff: usize,
    /// Groups emitted.
    pub groups_emitted: usize,
    /// Queries whose whole group was skipped because decomposition failed.
    /// One entry per distinct query.
    pub skipped_queries: Vec<DecomposeError>,
}
