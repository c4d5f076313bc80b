//! Abbreviation-plausibility check backed by [`AbbreviationMatcher`].

use abbrv_model::{Category, Finding, Record};

use crate::matcher::AbbreviationMatcher;

pub fn check(file: &str, records: &[Record], matcher: &AbbreviationMatcher) -> Vec<Finding> {
    records
        .iter()
        .filter_map(|record| {
            let (full_name, abbreviation) = record.pair()?;
            let decision = matcher.evaluate(full_name, abbreviation);
            if decision.valid {
                return None;
            }
            let unmatched = if decision.unmatched.is_empty() {
                String::new()
            } else {
                format!(" (unmatched: {})", decision.unmatched.join(", "))
            };
            Some(Finding::new(
                Category::ImplausibleAbbreviation,
                file,
                record.line,
                format!(
                    "Abbreviation '{abbreviation}' does not match full name '{full_name}'{unmatched}"
                ),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_implausible_rows_with_both_values() {
        let records = vec![
            Record::new(
                1,
                vec![
                    "Physical Review Letters".to_string(),
                    "Phys. Rev. Lett.".to_string(),
                ],
            ),
            Record::new(
                2,
                vec!["Journal of Biological Chemistry".to_string(), "XYZ".to_string()],
            ),
        ];
        let findings = check("a.csv", &records, &AbbreviationMatcher::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
        assert!(findings[0].message.contains("'XYZ'"));
        assert!(findings[0].message.contains("'Journal of Biological Chemistry'"));
        assert!(findings[0].message.contains("unmatched: xyz"));
    }
}
