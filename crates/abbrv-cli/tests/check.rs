use std::path::Path;

use abbrv_cli::check::{CheckRequest, run_check};
use abbrv_report::ReportTarget;
use abbrv_validate::CheckConfig;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

fn request(journals: &Path, out: &Path) -> CheckRequest {
    CheckRequest {
        journals_dir: journals.to_path_buf(),
        config: CheckConfig::default(),
        target: ReportTarget {
            summary_path: Some(out.join("summary.md")),
            ci_summary_path: Some(out.join("ci.md")),
        },
        json_path: Some(out.join("report.json")),
    }
}

#[test]
fn failing_run_publishes_everywhere() {
    let journals = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write(journals.path(), "a.csv", "\"\"\"Quoted Journal\",Q. J.\n");
    write(out.path(), "ci.md", "previous step\n");

    let outcome = run_check(&request(journals.path(), out.path())).unwrap();

    assert_eq!(outcome.exit_code, 1);
    assert!(outcome.summary.contains("Leading quote"));
    let summary = std::fs::read_to_string(out.path().join("summary.md")).unwrap();
    assert_eq!(summary, outcome.summary);
    let ci = std::fs::read_to_string(out.path().join("ci.md")).unwrap();
    assert!(ci.starts_with("previous step\n"));
    assert!(ci.ends_with(&outcome.summary));
    assert!(out.path().join("report.json").is_file());
}

#[test]
fn clean_run_exits_zero() {
    let journals = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write(journals.path(), "a.csv", "Physical Review Letters,Phys. Rev. Lett.\n");

    let outcome = run_check(&request(journals.path(), out.path())).unwrap();

    assert_eq!(outcome.exit_code, 0);
    assert_eq!(outcome.aggregator.total(), 0);
    assert!(outcome.summary.contains("No issues found"));
}

#[test]
fn missing_directory_writes_nothing() {
    let out = tempfile::tempdir().unwrap();
    let missing = out.path().join("journals");

    let error = run_check(&request(&missing, out.path())).unwrap_err();

    assert!(format!("{error:#}").contains("directory not found"));
    assert!(!out.path().join("summary.md").exists());
    assert!(!out.path().join("ci.md").exists());
    assert!(!out.path().join("report.json").exists());
}
