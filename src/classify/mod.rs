//! Topic-classification collaborator seam.
//!
//! A sibling pruning stage classifies candidates by topic with a generative
//! model. The reranker does not depend on the judgment, but shares the
//! candidate record shape, so the contract lives here.

pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::ClassifyError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTopicClassifier;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::record::SearchCandidate;

/// Structured judgment for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgment {
    pub classification: String,
    pub rationale: String,
}

impl Judgment {
    /// Fallback judgment when a backend returns nothing usable.
    pub fn unclassified(rationale: impl Into<String>) -> Self {
        Self {
            classification: "Unclassified".to_string(),
            rationale: rationale.into(),
        }
    }
}

/// Classifies a candidate into a topic.
#[async_trait]
pub trait TopicClassifier: Send + Sync {
    async fn classify(&self, candidate: &SearchCandidate) -> Result<Judgment, ClassifyError>;
}
