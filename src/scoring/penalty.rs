//! Negative (absence) scoring pass.

use crate::normalize::normalize;
use crate::query::QueryComponents;
use crate::record::SearchCandidate;

use super::types::{PenaltyOutcome, component_weight};

/// Penalizes query components absent from all candidate metadata.
///
/// Every non-empty component whose normalized value is not a substring of
/// any normalized metadata field subtracts its weight once. Components
/// absent from the query are skipped — they are never penalized.
#[derive(Debug, Default, Clone, Copy)]
pub struct PenaltyScorer;

impl PenaltyScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(
        &self,
        components: &QueryComponents,
        candidate: &SearchCandidate,
    ) -> PenaltyOutcome {
        let cleaned_fields: Vec<String> = candidate
            .metadata_fields()
            .iter()
            .map(|(_, raw)| normalize(raw))
            .collect();

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

            if !cleaned_fields.iter().any(|field| field.contains(&cleaned)) {
                let weight = component_weight(component);
                score -= weight;
                rationale.push(format!("penalty for missing {component} (weight {weight})"));
            }
        }

        PenaltyOutcome {
            score,
            rationale: rationale.join(" | "),
        }
    }
}
