//! Validation check modules.
//!
//! Each module performs one independent check over the records of a file
//! and returns its findings in source order. Checks never mutate records
//! and never stop each other.

mod duplicates;
mod encoding;
mod escape;
mod identical;
mod leading_quote;
mod outdated;
mod plausibility;

pub use escape::ALLOWED_ESCAPES;

use abbrv_model::{Finding, Record};
use tracing::debug;

use crate::matcher::AbbreviationMatcher;

/// Run all validation checks on the records of one file.
pub fn run_all(file: &str, records: &[Record], matcher: &AbbreviationMatcher) -> Vec<Finding> {
    let mut findings = Vec::new();

    // 1. Fields that did not survive decoding intact
    collect(&mut findings, "encoding", encoding::check(file, records));

    // 2. Backslash sequences outside the allow-list
    collect(&mut findings, "escape", escape::check(file, records));

    // 3. Full names starting with a literal quote
    collect(&mut findings, "leading_quote", leading_quote::check(file, records));

    // 4. Repeated full names or abbreviations (warnings)
    collect(&mut findings, "duplicates", duplicates::check(file, records));

    // 5. Multi-word full names identical to their abbreviation (warnings)
    collect(&mut findings, "identical", identical::check(file, records));

    // 6. Legacy spellings (warnings)
    collect(&mut findings, "outdated", outdated::check(file, records));

    // 7. Abbreviations that cannot come from their full name
    collect(
        &mut findings,
        "plausibility",
        plausibility::check(file, records, matcher),
    );

    findings
}

fn collect(findings: &mut Vec<Finding>, check: &str, found: Vec<Finding>) {
    debug!(check, findings = found.len(), "check complete");
    findings.extend(found);
}
