//! Collaborator trait contracts, exercised through the mock backends.

use docrank::classify::{MockTopicClassifier, TopicClassifier};
use docrank::fetch::{MockSearchFetch, SearchFetch};
use docrank::rerank::Reranker;

#[tokio::test]
async fn test_mock_fetch_assigns_ranks_in_order() {
    let mut fetch = MockSearchFetch::new();
    fetch.add("Acme Corp USA 2021 10-K", "Acme Corp 10-K", "");
    fetch.add("Acme Corp USA 2021 10-K", "Acme Corp", "filing");
    fetch.add("Other Co USA 2020 10-K", "Other Co", "");

    let candidates = fetch.fetch("Acme Corp USA 2021 10-K").await.unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].rank, 1);
    assert_eq!(candidates[1].rank, 2);
}

#[tokio::test]
async fn test_fetched_candidates_feed_the_engine() {
    let mut fetch = MockSearchFetch::new();
    let query = "Acme Corp USA 2021 10-K";
    fetch.add(query, "unrelated", "");
    fetch.add(query, "Acme Corp 10-K 2021", "Acme Corp USA");

    let candidates = fetch.fetch(query).await.unwrap();

    let reranker = Reranker::new();
    let (groups, summary) = reranker.rerank_candidates(candidates, 500).unwrap();

    assert_eq!(summary.candidates_scored, 2);
    assert_eq!(groups.len(), 1);
    // The fully matching candidate moves up.
    assert_eq!(groups[0].records[0].candidate.rank, 2);
}

#[tokio::test]
async fn test_mock_classifier_returns_judgment() {
    let mut fetch = MockSearchFetch::new();
    fetch.add("Acme Corp USA 2021 10-K", "Acme Corp annual report", "");
    let candidates = fetch.fetch("Acme Corp USA 2021 10-K").await.unwrap();

    let classifier = MockTopicClassifier::new("Annual Report");
    let judgment = classifier.classify(&candidates[0]).await.unwrap();

    assert_eq!(judgment.classification, "Annual Report");
    assert!(judgment.rationale.contains("Acme Corp annual report"));
}
