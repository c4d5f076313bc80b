//! Merging several abbreviation lists into one.
//!
//! Inputs are read in precedence order. Rows are keyed by their trimmed full
//! name; comment lines (`#`), blank lines and rows without an abbreviation are
//! skipped. The result is sorted by key.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::info;

/// Which row survives when a full name appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeepPolicy {
    First,
    /// Later inputs override earlier ones.
    #[default]
    Last,
}

/// Counts reported after a combine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineSummary {
    /// Usable rows read per input, in input order.
    pub inputs: Vec<(PathBuf, usize)>,
    /// Distinct full names written.
    pub keys: usize,
    pub output: PathBuf,
}

impl CombineSummary {
    pub fn rows_read(&self) -> usize {
        self.inputs.iter().map(|(_, rows)| rows).sum()
    }
}

pub fn combine_lists(
    inputs: &[PathBuf],
    output: &Path,
    delimiter: u8,
    keep: KeepPolicy,
) -> Result<CombineSummary> {
    let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut counts = Vec::with_capacity(inputs.len());

    for input in inputs {
        let rows = read_rows(input, delimiter)?;
        info!(path = %input.display(), rows = rows.len(), "input read");
        counts.push((input.clone(), rows.len()));
        for fields in rows {
            let Some(key) = fields.first().cloned() else {
                continue;
            };
            match keep {
                KeepPolicy::Last => {
                    entries.insert(key, fields);
                }
                KeepPolicy::First => {
                    entries.entry(key).or_insert(fields);
                }
            }
        }
    }

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_path(output)
        .with_context(|| format!("create {}", output.display()))?;
    for fields in entries.values() {
        writer
            .write_record(fields)
            .with_context(|| format!("write {}", output.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("write {}", output.display()))?;

    let summary = CombineSummary {
        inputs: counts,
        keys: entries.len(),
        output: output.to_path_buf(),
    };
    info!(
        inputs = summary.inputs.len(),
        rows = summary.rows_read(),
        keys = summary.keys,
        output = %output.display(),
        "lists combined"
    );
    Ok(summary)
}

/// Trimmed fields of every usable row.
fn read_rows(path: &Path, delimiter: u8) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .comment(Some(b'#'))
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record: StringRecord = result.with_context(|| format!("read {}", path.display()))?;
        let fields: Vec<String> = record.iter().map(|f| f.trim().to_string()).collect();
        if fields.len() < 2 || fields[0].is_empty() {
            continue;
        }
        rows.push(fields);
    }
    Ok(rows)
}
