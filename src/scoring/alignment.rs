//! Positive (match) scoring pass.

use crate::normalize::normalize;
use crate::query::QueryComponents;
use crate::record::SearchCandidate;

use super::types::{MATCH_MULTIPLIER, MatchOutcome, component_weight};

/// Scores how well a candidate's metadata aligns with the query components.
///
/// Every non-empty component whose normalized value appears as a substring
/// of a normalized metadata field contributes `2 × weight`. A component may
/// match several fields; each match adds independently. A component with no
/// match contributes zero here — absence is the penalty pass's concern.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlignmentScorer;

impl AlignmentScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(
        &self,
        components: &QueryComponents,
        candidate: &SearchCandidate,
    ) -> MatchOutcome {
        let mut score = 0.0;
        let mut rationale = Vec::new();

        for (component, value) in components.fields() {
            let Some(value) = value else {
                continue;
            };
            let cleaned = normalize(value);
            if cleaned.is_empty() {
                continue;
            }

            let weight = component_weight(component);
            for (field, raw) in candidate.metadata_fields() {
                if normalize(raw).contains(&cleaned) {
                    score += MATCH_MULTIPLIER * weight;
                    rationale.push(format!(
                        "exact match for {component}='{value}' in {field} (weight {weight})"
                    ));
                }
            }
        }

        MatchOutcome {
            score,
            rationale: rationale.join(" | "),
        }
    }
}
