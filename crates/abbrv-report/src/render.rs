//! Human-readable summary rendering.

use std::fmt::Write;

use abbrv_model::{Finding, Severity};
use abbrv_validate::IssueAggregator;
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{CellAlignment, ContentArrangement, Table};

/// Process exit status for a finished run: `1` if any error was recorded.
pub fn exit_code(aggregator: &IssueAggregator) -> i32 {
    if aggregator.has_errors() { 1 } else { 0 }
}

/// Renders the summary as Markdown so the same text reads well on a
/// terminal, in the summary file and in a CI step summary.
///
/// Files are listed alphabetically, each with its errors then its warnings.
pub fn render_summary(aggregator: &IssueAggregator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Journal abbreviation quality report");
    let _ = writeln!(out);
    let _ = writeln!(out, "Files checked: {}", aggregator.files_checked());
    let _ = writeln!(
        out,
        "Total findings: {} (errors: {}, warnings: {})",
        aggregator.total(),
        aggregator.error_count(),
        aggregator.warning_count()
    );

    if aggregator.total() > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", category_table(aggregator));
    }

    for (file, findings) in aggregator.files() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## {file}");
        write_section(&mut out, "Errors", findings, Severity::Error);
        write_section(&mut out, "Warnings", findings, Severity::Warning);
    }

    let _ = writeln!(out);
    if aggregator.has_errors() {
        let _ = writeln!(out, "Quality check failed.");
    } else if aggregator.total() > 0 {
        let _ = writeln!(out, "Quality check passed with warnings.");
    } else {
        let _ = writeln!(out, "Quality check passed. No issues found.");
    }
    out
}

fn category_table(aggregator: &IssueAggregator) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .force_no_tty()
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec!["Category", "Severity", "Count"]);
    for (category, count) in aggregator.counts() {
        table.add_row(vec![
            category.label().to_string(),
            category.severity().label().to_string(),
            count.to_string(),
        ]);
    }
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn write_section(out: &mut String, title: &str, findings: &[Finding], severity: Severity) {
    let mut selected = findings.iter().filter(|f| f.severity == severity).peekable();
    if selected.peek().is_none() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "### {title}");
    let _ = writeln!(out);
    for finding in selected {
        let _ = writeln!(
            out,
            "- line {} ({}): {}",
            finding.line, finding.category, finding.message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abbrv_model::Category;

    #[test]
    fn empty_run_passes() {
        let mut aggregator = IssueAggregator::new();
        aggregator.mark_checked();
        let summary = render_summary(&aggregator);
        assert!(summary.contains("Files checked: 1"));
        assert!(summary.contains("Total findings: 0 (errors: 0, warnings: 0)"));
        assert!(summary.ends_with("Quality check passed. No issues found.\n"));
        assert!(!summary.contains("| Category"));
        assert_eq!(exit_code(&aggregator), 0);
    }

    #[test]
    fn errors_listed_before_warnings() {
        let mut aggregator = IssueAggregator::new();
        aggregator.record(Finding::new(Category::Duplicate, "a.csv", 1, "dup first"));
        aggregator.record(Finding::new(Category::WrongEscape, "a.csv", 5, "bad escape"));
        let summary = render_summary(&aggregator);

        let errors = summary.find("### Errors").expect("errors section");
        let warnings = summary.find("### Warnings").expect("warnings section");
        assert!(errors < warnings);
        assert!(summary.contains("- line 5 (Wrong escape): bad escape"));
        assert!(summary.contains("- line 1 (Duplicate): dup first"));
        assert!(summary.ends_with("Quality check failed.\n"));
        assert_eq!(exit_code(&aggregator), 1);
    }

    #[test]
    fn warnings_only_exit_zero() {
        let mut aggregator = IssueAggregator::new();
        aggregator.record(Finding::new(Category::FullFormIdentical, "a.csv", 1, "Journal X"));
        let summary = render_summary(&aggregator);
        assert!(!summary.contains("### Errors"));
        assert!(summary.contains("Quality check passed with warnings."));
        assert_eq!(exit_code(&aggregator), 0);
    }
}
