//! Canned classifier for tests.

use async_trait::async_trait;

use crate::record::SearchCandidate;

use super::{ClassifyError, Judgment, TopicClassifier};

/// Returns the same classification for every candidate.
#[derive(Debug, Clone)]
pub struct MockTopicClassifier {
    pub classification: String,
}

impl MockTopicClassifier {
    pub fn new(classification: impl Into<String>) -> Self {
        Self {
            classification: classification.into(),
        }
    }
}

#[async_trait]
impl TopicClassifier for MockTopicClassifier {
    async fn classify(&self, candidate: &SearchCandidate) -> Result<Judgment, ClassifyError> {
        Ok(Judgment {
            classification: self.classification.clone(),
            rationale: format!("mock judgment for '{}'", candidate.title),
        })
    }
}
