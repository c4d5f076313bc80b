//! JSON export of an aggregated run.

use std::path::Path;

use abbrv_model::{Category, Finding, Severity};
use abbrv_validate::IssueAggregator;
use serde::Serialize;

use crate::error::{ReportError, Result};

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub files_checked: usize,
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub categories: Vec<CategoryCount>,
    pub files: Vec<FileFindings<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub severity: Severity,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct FileFindings<'a> {
    pub file: &'a str,
    pub findings: &'a [Finding],
}

impl<'a> JsonReport<'a> {
    pub fn from_aggregator(aggregator: &'a IssueAggregator) -> Self {
        Self {
            files_checked: aggregator.files_checked(),
            total: aggregator.total(),
            errors: aggregator.error_count(),
            warnings: aggregator.warning_count(),
            categories: aggregator
                .counts()
                .map(|(category, count)| CategoryCount {
                    category,
                    severity: category.severity(),
                    count,
                })
                .collect(),
            files: aggregator
                .files()
                .map(|(file, findings)| FileFindings { file, findings })
                .collect(),
        }
    }
}

/// Write the aggregated findings to `path` as pretty JSON.
pub fn write_json(aggregator: &IssueAggregator, path: &Path) -> Result<()> {
    let report = JsonReport::from_aggregator(aggregator);
    let mut body = serde_json::to_string_pretty(&report)?;
    body.push('\n');
    std::fs::write(path, body).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
