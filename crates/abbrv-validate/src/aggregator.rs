//! Issue aggregation across files.

use std::collections::BTreeMap;

use abbrv_model::{Category, Finding, Severity};

/// Accumulates findings for one run.
///
/// Strictly additive: findings are never removed or rewritten. Files are
/// kept in alphabetical order; findings within a file stay in the order
/// they were recorded.
#[derive(Debug, Clone, Default)]
pub struct IssueAggregator {
    counts: BTreeMap<Category, usize>,
    files: BTreeMap<String, Vec<Finding>>,
    files_checked: usize,
}

impl IssueAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finding under its file.
    pub fn record(&mut self, finding: Finding) {
        *self.counts.entry(finding.category).or_default() += 1;
        self.files
            .entry(finding.file.clone())
            .or_default()
            .push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.record(finding);
        }
    }

    /// Note that a file was checked, whether or not it produced findings.
    pub fn mark_checked(&mut self) {
        self.files_checked += 1;
    }

    pub fn files_checked(&self) -> usize {
        self.files_checked
    }

    /// Sum of all category counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Non-zero category counts in category order.
    pub fn counts(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.counts.iter().map(|(category, count)| (*category, *count))
    }

    pub fn severity_count(&self, severity: Severity) -> usize {
        self.counts()
            .filter(|(category, _)| category.severity() == severity)
            .map(|(_, count)| count)
            .sum()
    }

    pub fn error_count(&self) -> usize {
        self.severity_count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.severity_count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Files with findings, alphabetically.
    pub fn files(&self) -> impl Iterator<Item = (&str, &[Finding])> {
        self.files
            .iter()
            .map(|(file, findings)| (file.as_str(), findings.as_slice()))
    }

    pub fn findings_for(&self, file: &str) -> &[Finding] {
        self.files.get(file).map(Vec::as_slice).unwrap_or(&[])
    }
}
