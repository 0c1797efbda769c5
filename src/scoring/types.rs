use crate::query::Component;

/// Base multiplier applied to a component's weight on every field match.
pub const MATCH_MULTIPLIER: f64 = 2.0;

/// Fixed alignment weight for a query component.
///
/// Company name dominates, then report type, year, country. The same table
/// drives both the match pass (scaled by [`MATCH_MULTIPLIER`]) and the
/// penalty pass (unscaled).
#[inline]
pub fn component_weight(component: Component) -> f64 {
    match component {
        Component::CompanyName => 8.0,
        Component::ReportType => 4.0,
        Component::Year => 2.0,
        Component::Country => 1.0,
    }
}

/// Sum of all component weights (15). A fully populated component set with
/// zero metadata matches scores exactly `-weight_sum()`.
#[inline]
pub fn weight_sum() -> f64 {
    Component::ALL.iter().copied().map(component_weight).sum()
}

/// Result of the alignment (match) pass. `score` is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub score: f64,
    /// Trace of which component matched which metadata field.
    pub rationale: String,
}

impl MatchOutcome {
    /// Outcome with no matches.
    pub fn zero() -> Self {
        Self {
            score: 0.0,
            rationale: String::new(),
        }
    }
}

/// Result of the penalty pass. `score` is non-positive.
#[derive(Debug, Clone, PartialEq)]
pub struct PenaltyOutcome {
    pub score: f64,
    /// Trace of which components were absent from all metadata fields.
    pub rationale: String,
}

impl PenaltyOutcome {
    /// Outcome with no penalties.
    pub fn zero() -> Self {
        Self {
            score: 0.0,
            rationale: String::new(),
        }
    }
}
