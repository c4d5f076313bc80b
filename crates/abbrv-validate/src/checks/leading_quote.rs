//! Leading-quote check: a full name starting with `"` after CSV unquoting
//! points at a quoting bug upstream.

use abbrv_model::{Category, Finding, Record};

pub fn check(file: &str, records: &[Record]) -> Vec<Finding> {
    records
        .iter()
        .filter_map(|record| {
            let full_name = record.full_name()?;
            full_name.starts_with('"').then(|| {
                Finding::new(
                    Category::LeadingQuote,
                    file,
                    record.line,
                    format!("Full name starts with a quote: {full_name}"),
                )
            })
        })
        .collect()
}
