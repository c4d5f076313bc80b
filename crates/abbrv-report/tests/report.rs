//! Report rendering over real check runs.

use std::fs;

use abbrv_model::{Category, Finding};
use abbrv_report::{JsonReport, exit_code, render_summary, write_json};
use abbrv_validate::{IssueAggregator, QualityChecker};
use tempfile::TempDir;

#[test]
fn one_error_file_fails_the_run() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("a.csv"), "Optics \\q Letters,Opt. Lett.\n").expect("write a");
    fs::write(dir.path().join("b.csv"), "Journal X,Journal X\n").expect("write b");

    let aggregator = QualityChecker::default()
        .check_directory(dir.path())
        .expect("check directory");
    assert_eq!(aggregator.error_count(), 1);
    assert_eq!(aggregator.warning_count(), 1);
    assert_eq!(exit_code(&aggregator), 1);

    let summary = render_summary(&aggregator);
    assert!(summary.contains("Total findings: 2 (errors: 1, warnings: 1)"));
    let a = summary.find("## a.csv").expect("a.csv section");
    let b = summary.find("## b.csv").expect("b.csv section");
    assert!(a < b);
    assert!(summary.contains("| Wrong escape"));
    assert!(summary.contains("| Full form identical"));
}

#[test]
fn clean_directory_exits_zero() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(
        dir.path().join("clean.csv"),
        "Nature,Nature\nNature Physics,Nat. Phys.\n",
    )
    .expect("write clean");
    let aggregator = QualityChecker::default()
        .check_directory(dir.path())
        .expect("check directory");
    assert_eq!(exit_code(&aggregator), 0);
}

#[test]
fn rendering_is_repeatable() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(
        dir.path().join("list.csv"),
        "Journal X,Journal X\nBad \\c Name,B. N.\nJournal X,J. X.\n",
    )
    .expect("write list");
    let checker = QualityChecker::default();
    let first = render_summary(&checker.check_directory(dir.path()).expect("first run"));
    let second = render_summary(&checker.check_directory(dir.path()).expect("second run"));
    assert_eq!(first, second);
}

fn sample_aggregator() -> IssueAggregator {
    let mut aggregator = IssueAggregator::new();
    aggregator.mark_checked();
    aggregator.mark_checked();
    aggregator.record(Finding::new(
        Category::Duplicate,
        "b.csv",
        9,
        "Duplicate full name 'Nature Physics' (first seen at line 2)",
    ));
    aggregator.record(Finding::new(Category::WrongEscape, "a.csv", 2, "bad escape"));
    aggregator
}

#[test]
fn json_report_snapshot() {
    let aggregator = sample_aggregator();
    let report = JsonReport::from_aggregator(&aggregator);
    insta::assert_json_snapshot!("quality_report_json", report);
}

#[test]
fn json_report_written_to_disk() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("report.json");
    write_json(&sample_aggregator(), &path).expect("write json");
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read json")).expect("parse json");
    assert_eq!(value["total"], 2);
    assert_eq!(value["errors"], 1);
    assert_eq!(value["files"][0]["file"], "a.csv");
    assert_eq!(value["files"][1]["findings"][0]["line"], 9);
}
