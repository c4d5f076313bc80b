//! Re-check of decoded fields.
//!
//! A file can decode and still carry replacement characters left behind by
//! an earlier lossy conversion. Those fields no longer round-trip to the
//! original bytes and are reported as non-UTF8 content.

use abbrv_model::{Category, Finding, Record};

const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// One finding per line holding a replacement character.
pub fn check(file: &str, records: &[Record]) -> Vec<Finding> {
    records
        .iter()
        .filter(|record| record.fields.iter().any(|field| field.contains(REPLACEMENT)))
        .map(|record| {
            Finding::new(
                Category::NonUtf8,
                file,
                record.line,
                format!(
                    "Field contains an undecodable character: {}",
                    record.joined()
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_replacement_characters_once_per_line() {
        let records = vec![
            Record::new(1, vec!["Caf\u{fffd}".to_string(), "C\u{fffd}".to_string()]),
            Record::new(2, vec!["Café".to_string(), "Café".to_string()]),
        ];
        let findings = check("a.csv", &records);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
        assert_eq!(findings[0].category, Category::NonUtf8);
    }
}
