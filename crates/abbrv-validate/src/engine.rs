//! Per-file and per-directory check runs.

use std::path::Path;

use abbrv_ingest::{
    IngestError, LoadOptions, LoadOutcome, Result, file_label, list_input_files, load_records,
};
use abbrv_model::{Category, Finding};
use tracing::{info, info_span, warn};

use crate::aggregator::IssueAggregator;
use crate::checks;
use crate::config::CheckConfig;
use crate::matcher::AbbreviationMatcher;

/// Runs every check over the files of one directory.
#[derive(Debug, Clone)]
pub struct QualityChecker {
    options: LoadOptions,
    extension: String,
    matcher: AbbreviationMatcher,
}

impl Default for QualityChecker {
    fn default() -> Self {
        Self::new(&CheckConfig::default())
    }
}

impl QualityChecker {
    pub fn new(config: &CheckConfig) -> Self {
        Self {
            options: LoadOptions::default().with_delimiter(config.delimiter),
            extension: config.extension.clone(),
            matcher: AbbreviationMatcher::new(&config.matcher),
        }
    }

    /// Check every matching file in `dir`.
    ///
    /// A missing or unlistable directory fails before any file is read.
    /// Problems with individual files, including read failures, become
    /// findings and never stop the run.
    pub fn check_directory(&self, dir: &Path) -> Result<IssueAggregator> {
        let files = list_input_files(dir, &self.extension)?;
        let mut aggregator = IssueAggregator::new();
        for path in &files {
            self.check_file(path, &mut aggregator)?;
        }
        info!(
            dir = %dir.display(),
            files = aggregator.files_checked(),
            errors = aggregator.error_count(),
            warnings = aggregator.warning_count(),
            "quality check complete"
        );
        Ok(aggregator)
    }

    /// Check one file and record its findings, ordered by source line.
    pub fn check_file(&self, path: &Path, aggregator: &mut IssueAggregator) -> Result<()> {
        let file = file_label(path);
        let span = info_span!("file", file = %file);
        let _guard = span.enter();

        let findings = match load_records(path, &self.options) {
            Ok(LoadOutcome::Records(records)) => {
                let mut findings = checks::run_all(&file, &records, &self.matcher);
                findings.sort_by_key(|finding| finding.line);
                findings
            }
            Ok(LoadOutcome::Undecodable { line, offset }) => vec![Finding::new(
                Category::NonUtf8,
                &file,
                line,
                format!("File is not valid UTF-8 (invalid byte sequence at offset {offset})"),
            )],
            Err(IngestError::CsvParse { line, message, .. }) => {
                warn!(line, %message, "skipping unparsable file");
                vec![Finding::new(Category::MalformedRow, &file, line, message)]
            }
            Err(IngestError::FileRead { source, .. }) => {
                warn!(error = %source, "skipping unreadable file");
                vec![Finding::new(
                    Category::Unreadable,
                    &file,
                    1,
                    format!("File could not be read: {source}"),
                )]
            }
            Err(err) => return Err(err),
        };

        aggregator.mark_checked();
        aggregator.extend(findings);
        Ok(())
    }
}
