//! Duplicate check.
//!
//! Tracks the first line each full name and each abbreviation was seen on.
//! A later record repeating either raises one warning pointing back at the
//! first occurrence. Lookups keep working with duplicates (the last entry
//! wins when lists are combined), hence a warning.

use std::collections::HashMap;

use abbrv_model::{Category, Finding, Record};

pub fn check(file: &str, records: &[Record]) -> Vec<Finding> {
    let mut full_names: HashMap<&str, usize> = HashMap::new();
    let mut abbreviations: HashMap<&str, usize> = HashMap::new();
    let mut findings = Vec::new();

    for record in records {
        let Some((full_name, abbreviation)) = record.pair() else {
            continue;
        };
        let message = if let Some(first) = full_names.get(full_name) {
            Some(format!(
                "Duplicate full name '{full_name}' (first seen at line {first})"
            ))
        } else {
            abbreviations.get(abbreviation).map(|first| {
                format!("Duplicate abbreviation '{abbreviation}' (first seen at line {first})")
            })
        };
        if let Some(message) = message {
            findings.push(Finding::new(Category::Duplicate, file, record.line, message));
        }
        full_names.entry(full_name).or_insert(record.line);
        abbreviations.entry(abbreviation).or_insert(record.line);
    }
    findings
}
