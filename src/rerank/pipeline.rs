//! The rerank pipeline: decompose, score, aggregate, emit.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::query::QueryDecomposer;
use crate::record::{SearchCandidate, read_candidates, write_records};
use crate::scoring::{CandidateScorer, StringMatchScorer};

use super::aggregator::RankAggregator;
use super::error::RerankError;
use super::types::{RankedGroup, RerankSummary, ScoredCandidate};

/// Drives one reranking pass over a candidate stream.
///
/// Candidates whose original rank exceeds the cutoff `k` are excluded from
/// scoring entirely. A query that fails decomposition has its whole group
/// skipped (logged once per query, reported in the summary); the run is
/// never aborted for a bad query.
pub struct Reranker<S = StringMatchScorer> {
    decomposer: QueryDecomposer,
    scorer: S,
}

impl Reranker<StringMatchScorer> {
    /// Reranker with the deterministic string-matching scorer.
    pub fn new() -> Self {
        Self::with_scorer(QueryDecomposer::new(), StringMatchScorer::new())
    }
}

impl Default for Reranker<StringMatchScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CandidateScorer> Reranker<S> {
    /// Reranker with a custom scoring backend.
    pub fn with_scorer(decomposer: QueryDecomposer, scorer: S) -> Self {
        Self { decomposer, scorer }
    }

    /// Returns the query decomposer (exposes cache introspection).
    pub fn decomposer(&self) -> &QueryDecomposer {
        &self.decomposer
    }

    /// Scores and reorders `candidates`, grouped by originating query.
    ///
    /// Groups come out in query-encounter order, each ordered by ascending
    /// `new_rank`.
    pub fn rerank_candidates(
        &self,
        candidates: Vec<SearchCandidate>,
        k: u32,
    ) -> Result<(Vec<RankedGroup>, RerankSummary), RerankError> {
        let mut aggregator = RankAggregator::new();
        let mut summary = RerankSummary::default();
        let mut skipped: HashSet<String> = HashSet::new();

        for candidate in candidates {
            summary.candidates_seen += 1;

            if candidate.rank > k {
                summary.beyond_cutoff += 1;
                continue;
            }

            if skipped.contains(&candidate.query) {
                continue;
            }

            let components = match self.decomposer.decompose(&candidate.query) {
                Ok(components) => components,
                Err(err) => {
                    warn!(
                        query = %candidate.query,
                        kind = err.kind(),
                        "Skipping query group: decomposition failed"
                    );
                    skipped.insert(candidate.query.clone());
                    summary.skipped_queries.push(err);
                    continue;
                }
            };

            let match_outcome = self.scorer.score_match(&components, &candidate)?;
            let penalty_outcome = self.scorer.score_penalty(&components, &candidate)?;

            debug!(
                query = %candidate.query,
                rank = candidate.rank,
                match_score = match_outcome.score,
                penalty_score = penalty_outcome.score,
                "Scored candidate"
            );

            summary.candidates_scored += 1;
            aggregator.push(ScoredCandidate {
                candidate,
                match_outcome,
                penalty_outcome,
            });
        }

        let groups = aggregator.finish();
        summary.groups_emitted = groups.len();

        Ok((groups, summary))
    }

    /// Reads JSONL candidates from `reader`, reranks those with
    /// `rank <= k`, and writes JSONL scored records to `writer`.
    pub fn rerank<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
        k: u32,
    ) -> Result<RerankSummary, RerankError> {
        let candidates = read_candidates(reader)?;
        let (groups, summary) = self.rerank_candidates(candidates, k)?;

        for group in &groups {
            write_records(writer, &group.records)?;
        }

        info!(
            candidates_seen = summary.candidates_seen,
            candidates_scored = summary.candidates_scored,
            beyond_cutoff = summary.beyond_cutoff,
            groups_emitted = summary.groups_emitted,
            queries_skipped = summary.skipped_queries.len(),
            "Rerank pass complete"
        );

        Ok(summary)
    }

    /// Convenience wrapper over [`rerank`](Self::rerank) for file paths.
    pub fn rerank_file(
        &self,
        input_path: &Path,
        output_path: &Path,
        k: u32,
    ) -> Result<RerankSummary, RerankError> {
        let reader = BufReader::new(File::open(input_path)?);
        let mut writer = BufWriter::new(File::create(output_path)?);
        self.rerank(reader, &mut writer, k)
    }
}

impl<S> std::fmt::Debug for Reranker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reranker")
            .field("decomposer", &self.decomposer)
            .finish()
    }
}
