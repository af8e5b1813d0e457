use name_score::normalize::normalize_names;
use name_score::pipeline::{compute, compute_total};
use name_score::ranking::rank;
use name_score::scoring::{letter_sum, total_score};
use name_score::NormalizedName;

fn strs(names: &[NormalizedName]) -> Vec<&str> {
    names.iter().map(|n| n.as_str()).collect()
}

#[test]
fn test_mixed_case_and_noise() {
    let raw = ["colin", " AMY ", "bob3"];

    let normalized = normalize_names(&raw);
    assert_eq!(strs(&normalized), vec!["COLIN", "AMY", "BOB"]);

    let ranked = rank(normalized);
    assert_eq!(strs(ranked.as_slice()), vec!["AMY", "BOB", "COLIN"]);

    let sums: Vec<u64> = ranked.iter().map(letter_sum).collect();
    assert_eq!(sums, vec![39, 19, 53]);

    assert_eq!(total_score(&ranked), 236);
}

#[test]
fn test_empty_name_ranks_first() {
    let report = compute(&["", "a!!"]);

    assert_eq!(strs(report.ranked.as_slice()), vec!["", "A"]);
    assert_eq!(report.breakdown[0].score, 0);
    assert_eq!(report.breakdown[1].position, 2);
    assert_eq!(report.total, 2);
}

#[test]
fn test_empty_input() {
    assert_eq!(compute_total::<&str>(&[]), 0);
    assert_eq!(compute::<String>(&[]).name_count(), 0);
}

#[test]
fn test_duplicates_not_merged() {
    let report = compute(&["AA", "AA"]);

    assert_eq!(report.name_count(), 2);
    assert_eq!(report.total, 6);
    assert_ne!(report.total, compute_total(&["AA"]));
}

#[test]
fn test_single_letters() {
    assert_eq!(compute_total(&["a"]), 1);
    assert_eq!(compute_total(&["b"]), 2);
    assert_eq!(compute_total(&["z"]), 26);
}

#[test]
fn test_input_order_does_not_matter() {
    let forward = ["MARY", "PATRICIA", "LINDA", "BARBARA", "ELIZABETH"];
    let mut backward = forward;
    backward.reverse();

    assert_eq!(compute_total(&forward), compute_total(&backward));
}

#[test]
fn test_report_serializes_names_as_strings() {
    let report = compute(&["bob", "amy"]);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["ranked"], serde_json::json!(["AMY", "BOB"]));
    assert_eq!(json["breakdown"][1]["name"], "BOB");
    assert_eq!(json["total"], 39 + 19 * 2);
}
