use super::*;
use crate::query::QueryComponents;
use crate::record::SearchCandidate;

fn full_components() -> QueryComponents {
    QueryComponents {
        company_name: Some("Brookline Bancorp Inc".to_string()),
        country: Some("USA".to_string()),
        year: Some("2022".to_string()),
        report_type: Some("10-K/A".to_string()),
    }
}

fn candidate(title: &str, snippet: &str) -> SearchCandidate {
    SearchCandidate {
        query: "Brookline Bancorp Inc USA 2022 10-K/A".to_string(),
        rank: 1,
        title: title.to_string(),
        link: String::new(),
        snippet: snippet.to_string(),
        metatags_title: String::new(),
        subject: String::new(),
        creationdate: String::new(),
    }
}

#[test]
fn test_weight_table_sums_to_fifteen() {
    assert_eq!(weight_sum(), 15.0);
}

#[test]
fn test_company_name_in_title_contributes_sixteen() {
    let scorer = AlignmentScorer::new();
    let outcome = scorer.score(&full_components(), &candidate("Brookline Bancorp Inc", ""));

    assert_eq!(outcome.score, 16.0);
    assert!(outcome.rationale.contains("company_name"));
    assert!(outcome.rationale.contains("title"));
}

#[test]
fn test_company_name_in_two_fields_contributes_twice() {
    let scorer = AlignmentScorer::new();
    let outcome = scorer.score(
        &full_components(),
        &candidate("Brookline Bancorp Inc", "Brookline Bancorp Inc filing"),
    );

    assert_eq!(outcome.score, 32.0);
}

#[test]
fn test_match_is_punctuation_and_case_insensitive() {
    let scorer = AlignmentScorer::new();
    // "10-K/A" normalizes to "10ka", which appears inside the title after
    // its own normalization.
    let outcome = scorer.score(&full_components(), &candidate("FORM 10-K/A 2022", ""));

    // report_type (8) + year (4) both match the title.
    assert_eq!(outcome.score, 12.0);
}

#[test]
fn test_no_matches_scores_zero() {
    let scorer = AlignmentScorer::new();
    let outcome = scorer.score(&full_components(), &candidate("unrelated", "nothing here"));

    assert_eq!(outcome.score, 0.0);
    assert!(outcome.rationale.is_empty());
}

#[test]
fn test_full_absence_penalty_is_minus_fifteen() {
    let scorer = PenaltyScorer::new();
    let outcome = scorer.score(&full_components(), &candidate("unrelated", "nothing here"));

    assert_eq!(outcome.score, -15.0);
    assert!(outcome.rationale.contains("company_name"));
    assert!(outcome.rationale.contains("country"));
    assert!(outcome.rationale.contains("year"));
    assert!(outcome.rationale.contains("report_type"));
}

#[test]
fn test_present_component_is_not_penalized() {
    let scorer = PenaltyScorer::new();
    let outcome = scorer.score(&full_components(), &candidate("Brookline Bancorp Inc 2022", ""));

    // company_name and year found; report_type (4) and country (1) missing.
    assert_eq!(outcome.score, -5.0);
    assert!(!outcome.rationale.contains("company_name"));
}

#[test]
fn test_empty_components_are_skipped_by_both_passes() {
    let components = QueryComponents {
        company_name: Some("Acme".to_string()),
        country: None,
        year: None,
        report_type: None,
    };

    let match_outcome = AlignmentScorer::new().score(&components, &candidate("unrelated", ""));
    assert_eq!(match_outcome.score, 0.0);

    let penalty_outcome = PenaltyScorer::new().score(&components, &candidate("unrelated", ""));
    // Only the one populated component is penalized.
    assert_eq!(penalty_outcome.score, -8.0);
}

#[test]
fn test_string_match_scorer_combines_both_passes() {
    let scorer = StringMatchScorer::new();
    let components = full_components();
    let candidate = candidate("Brookline Bancorp Inc", "");

    let m = scorer.score_match(&components, &candidate).unwrap();
    let p = scorer.score_penalty(&components, &candidate).unwrap();

    assert_eq!(m.score, 16.0);
    // report_type (4), year (2), country (1) absent.
    assert_eq!(p.score, -7.0);
    assert_eq!(m.score + p.score, 9.0);
}
