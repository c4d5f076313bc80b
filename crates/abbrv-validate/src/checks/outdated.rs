//! Outdated-pattern check for the legacy `Manage.` spelling.

use abbrv_model::{Category, Finding, Record};

const OUTDATED: &str = "Manage.";
const CURRENT: &str = "Manag.";

pub fn check(file: &str, records: &[Record]) -> Vec<Finding> {
    records
        .iter()
        .filter_map(|record| {
            let has_outdated = record.fields.iter().any(|f| f.contains(OUTDATED));
            let has_current = record.fields.iter().any(|f| f.contains(CURRENT));
            (has_outdated && !has_current).then(|| {
                Finding::new(
                    Category::OutdatedAbbreviation,
                    file,
                    record.line,
                    format!(
                        "Outdated abbreviation '{OUTDATED}' (use '{CURRENT}'): {}",
                        record.joined()
                    ),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warns_only_without_current_spelling() {
        let records = vec![
            Record::new(1, vec!["Journal of Management".to_string(), "J. Manage.".to_string()]),
            Record::new(2, vec!["Journal of Management".to_string(), "J. Manag.".to_string()]),
            Record::new(
                3,
                vec![
                    "Management".to_string(),
                    "Manage.".to_string(),
                    "Manag.".to_string(),
                ],
            ),
        ];
        let findings = check("a.csv", &records);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
    }
}
