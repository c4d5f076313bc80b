//! Summary persistence and the CI step-summary sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ReportError, Result};

/// Summary file written at the end of every run.
pub const DEFAULT_SUMMARY_PATH: &str = "check_quality_summary.md";

/// Environment variable naming the CI step-summary file.
pub const DEFAULT_CI_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Where a rendered summary goes besides standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTarget {
    /// Summary file, overwritten on each run. `None` disables it.
    pub summary_path: Option<PathBuf>,
    /// CI sink file; appended to, as step-summary files are shared per job.
    pub ci_summary_path: Option<PathBuf>,
}

impl Default for ReportTarget {
    fn default() -> Self {
        Self {
            summary_path: Some(PathBuf::from(DEFAULT_SUMMARY_PATH)),
            ci_summary_path: None,
        }
    }
}

/// Paths actually written by [`publish`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Published {
    pub summary_file: Option<PathBuf>,
    pub ci_summary: Option<PathBuf>,
}

/// Reads the CI sink path from `env_name`. Unset or empty means no sink.
pub fn ci_summary_path(env_name: &str) -> Option<PathBuf> {
    std::env::var_os(env_name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Writes `summary` to the summary file and mirrors it to the CI sink.
pub fn publish(summary: &str, target: &ReportTarget) -> Result<Published> {
    let mut published = Published::default();
    if let Some(path) = &target.summary_path {
        std::fs::write(path, summary).map_err(|source| write_error(path, source))?;
        info!(path = %path.display(), "summary written");
        published.summary_file = Some(path.clone());
    }
    match &target.ci_summary_path {
        Some(path) => {
            append(path, summary)?;
            info!(path = %path.display(), "CI summary written");
            published.ci_summary = Some(path.clone());
        }
        None => debug!("no CI summary sink configured"),
    }
    Ok(published)
}

fn append(path: &Path, summary: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| write_error(path, source))?;
    file.write_all(summary.as_bytes())
        .map_err(|source| write_error(path, source))
}

fn write_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::Write {
        path: path.to_path_buf(),
        source,
    }
}
