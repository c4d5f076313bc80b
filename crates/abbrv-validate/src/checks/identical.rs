//! Full-form check: a multi-word name should not be its own abbreviation.
//! Single-word names legitimately are.

use abbrv_model::{Category, Finding, Record};

pub fn check(file: &str, records: &[Record]) -> Vec<Finding> {
    records
        .iter()
        .filter_map(|record| {
            let (full_name, abbreviation) = record.pair()?;
            let full_name = full_name.trim();
            (full_name == abbreviation.trim() && full_name.contains(' ')).then(|| {
                Finding::new(
                    Category::FullFormIdentical,
                    file,
                    record.line,
                    format!("Abbreviation is the same as the full form: {full_name}"),
                )
            })
        })
        .collect()
}
