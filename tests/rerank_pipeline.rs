//! End-to-end rerank pass over JSONL files.

use std::fs;

use docrank::record::ScoredRecord;
use docrank::rerank::Reranker;
use serde_json::json;
use tempfile::tempdir;

fn line(query: &str, rank: u32, title: &str, snippet: &str) -> String {
    json!({
        "query": query,
        "rank": rank,
        "title": title,
        "link": "",
        "snippet": snippet,
        "metatags_title": "",
        "subject": "",
        "creationdate": ""
    })
    .to_string()
}

fn read_output(path: &std::path::Path) -> Vec<ScoredRecord> {
    fs::read_to_string(path)
        .expect("output should exist")
        .lines()
        .map(|l| serde_json::from_str(l).expect("output line should parse"))
        .collect()
}

#[test]
fn test_rerank_file_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("candidates.jsonl");
    let output = dir.path().join("reranked.jsonl");

    let query = "Brookline Bancorp Inc USA 2022 10-K/A";
    let content = [
        line(query, 1, "unrelated press release", "nothing relevant"),
        line(query, 2, "Brookline Bancorp Inc 10-K/A 2022", "Brookline Bancorp Inc USA filing"),
        line(query, 3, "Brookline Bancorp Inc", ""),
    ]
    .join("\n");
    fs::write(&input, content).unwrap();

    let reranker = Reranker::new();
    let summary = reranker.rerank_file(&input, &output, 500).expect("rerank should succeed");

    assert_eq!(summary.candidates_seen, 3);
    assert_eq!(summary.candidates_scored, 3);
    assert_eq!(summary.groups_emitted, 1);
    assert!(summary.skipped_queries.is_empty());

    let records = read_output(&output);
    assert_eq!(records.len(), 3);

    // Richest candidate first, empty one last.
    assert_eq!(records[0].candidate.rank, 2);
    assert_eq!(records[0].new_rank, 1);
    assert_eq!(records[2].candidate.rank, 1);
    assert_eq!(records[2].new_rank, 3);

    // Output is sorted by descending combined score.
    assert!(records[0].score > records[1].score);
    assert!(records[1].score > records[2].score);

    // Input fields survive untouched.
    assert_eq!(records[0].candidate.query, query);
    assert_eq!(records[0].candidate.title, "Brookline Bancorp Inc 10-K/A 2022");

    // Scoring fields are all present and consistent.
    for record in &records {
        assert_eq!(record.score, record.match_score + record.penalty_score);
    }
}

#[test]
fn test_rerank_file_multiple_queries_and_cutoff() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("candidates.jsonl");
    let output = dir.path().join("reranked.jsonl");

    let acme = "Acme Corp USA 2021 10-K";
    let beta = "Beta Industries Germany 2020 annual report";
    let content = [
        line(acme, 1, "Acme Corp 10-K", ""),
        line(beta, 1, "Beta Industries annual report 2020", ""),
        line(acme, 2, "Acme Corp", ""),
        // Beyond the cutoff: never scored, never emitted.
        line(acme, 40, "Acme Corp 10-K 2021 USA", ""),
    ]
    .join("\n");
    fs::write(&input, content).unwrap();

    let reranker = Reranker::new();
    let summary = reranker.rerank_file(&input, &output, 30).unwrap();

    assert_eq!(summary.beyond_cutoff, 1);
    assert_eq!(summary.groups_emitted, 2);

    let records = read_output(&output);
    assert_eq!(records.len(), 3);

    // Query-encounter order: both acme records, then beta.
    assert_eq!(records[0].candidate.query, acme);
    assert_eq!(records[1].candidate.query, acme);
    assert_eq!(records[2].candidate.query, beta);

    // Each group re-ranked from 1.
    assert_eq!(records[0].new_rank, 1);
    assert_eq!(records[1].new_rank, 2);
    assert_eq!(records[2].new_rank, 1);
}

#[test]
fn test_rerank_file_skips_bad_query_group() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("candidates.jsonl");
    let output = dir.path().join("reranked.jsonl");

    let content = [
        line("no year anywhere", 1, "a", ""),
        line("Acme Corp USA 2021 10-K", 1, "Acme Corp", ""),
        line("no year anywhere", 2, "b", ""),
    ]
    .join("\n");
    fs::write(&input, content).unwrap();

    let reranker = Reranker::new();
    let summary = reranker.rerank_file(&input, &output, 500).unwrap();

    assert_eq!(summary.skipped_queries.len(), 1);
    assert_eq!(summary.skipped_queries[0].query(), "no year anywhere");
    assert_eq!(summary.groups_emitted, 1);

    let records = read_output(&output);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].candidate.query, "Acme Corp USA 2021 10-K");
}

#[test]
fn test_rerank_is_deterministic() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("candidates.jsonl");

    let query = "Acme Corp USA 2021 10-K";
    let content = [
        line(query, 1, "Acme Corp", "2021"),
        line(query, 2, "Acme Corp", "2021"),
        line(query, 3, "", "Acme Corp USA"),
    ]
    .join("\n");
    fs::write(&input, content).unwrap();

    let out_a = dir.path().join("a.jsonl");
    let out_b = dir.path().join("b.jsonl");

    let reranker = Reranker::new();
    reranker.rerank_file(&input, &out_a, 500).unwrap();
    reranker.rerank_file(&input, &out_b, 500).unwrap();

    assert_eq!(
        fs::read_to_string(&out_a).unwrap(),
        fs::read_to_string(&out_b).unwrap()
    );

    // Same query across both passes: decomposed once, served from cache after.
    assert_eq!(reranker.decomposer().cached_queries(), 1);
}
