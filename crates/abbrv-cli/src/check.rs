//! One quality-check run: check, render, publish.

use std::path::PathBuf;

use abbrv_report::{Published, ReportTarget, exit_code, publish, render_summary, write_json};
use abbrv_validate::{CheckConfig, IssueAggregator, QualityChecker};
use anyhow::{Context, Result};
use tracing::{info, info_span};

/// Everything a check run needs.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub journals_dir: PathBuf,
    pub config: CheckConfig,
    pub target: ReportTarget,
    /// Optional JSON export of the findings.
    pub json_path: Option<PathBuf>,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct CheckOutcome {
    pub summary: String,
    pub exit_code: i32,
    pub published: Published,
    pub json_path: Option<PathBuf>,
    pub aggregator: IssueAggregator,
}

/// Checks every list in the directory and publishes the summary.
///
/// Nothing is written when the directory cannot be read.
pub fn run_check(request: &CheckRequest) -> Result<CheckOutcome> {
    let span = info_span!("check", dir = %request.journals_dir.display());
    let _guard = span.enter();

    let aggregator = QualityChecker::new(&request.config)
        .check_directory(&request.journals_dir)
        .with_context(|| format!("check {}", request.journals_dir.display()))?;
    let summary = render_summary(&aggregator);
    let published = publish(&summary, &request.target).context("publish summary")?;
    if let Some(path) = &request.json_path {
        write_json(&aggregator, path).context("write JSON report")?;
        info!(path = %path.display(), "JSON report written");
    }

    Ok(CheckOutcome {
        exit_code: exit_code(&aggregator),
        summary,
        published,
        json_path: request.json_path.clone(),
        aggregator,
    })
}
