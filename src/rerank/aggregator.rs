//! Per-query buffering, sorting, and rank assignment.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::types::{RankedGroup, ScoredCandidate};

/// Buffers scored candidates per originating query and produces
/// [`RankedGroup`]s on [`finish`](RankAggregator::finish).
///
/// Groups come out in query-encounter order. Within a group the sort is
/// stable and descending by combined score, so candidates with equal scores
/// keep their input (original-rank) order.
#[derive(Debug, Default)]
pub struct RankAggregator {
    /// Query-encounter order.
    order: Vec<String>,
    groups: HashMap<String, Vec<ScoredCandidate>>,
}

impl RankAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scored candidate to its query's group.
    pub fn push(&mut self, scored: ScoredCandidate) {
        let query = scored.candidate.query.clone();
        match self.groups.get_mut(&query) {
            Some(group) => group.push(scored),
            None => {
                self.order.push(query.clone());
                self.groups.insert(query, vec![scored]);
            }
        }
    }

    /// Returns the number of buffered groups.
    pub fn group_count(&self) -> usize {
        self.order.len()
    }

    /// Sorts every group and assigns 1-based ranks.
    pub fn finish(mut self) -> Vec<RankedGroup> {
        let mut ranked = Vec::with_capacity(self.order.len());

        for query in self.order {
            let mut group = self
                .groups
                .remove(&query)
                .unwrap_or_default();

            group.sort_by(|a, b| {
                b.combined_score()
                    .partial_cmp(&a.combined_score())
                    .unwrap_or(Ordering::Equal)
            });

            let records = group
                .into_iter()
                .enumerate()
                .map(|(idx, scored)| scored.into_record(idx as u32 + 1))
                .collect();

            ranked.push(RankedGroup { query, records });
        }

        ranked
    }
}
