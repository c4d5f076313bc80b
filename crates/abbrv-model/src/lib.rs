//! Data model shared by the abbreviation list tooling.
//!
//! A [`Record`] is one parsed line of a journal abbreviation list, and a
//! [`Finding`] is one validation result produced for it.

pub mod finding;
pub mod record;

pub use finding::{Category, Finding, Severity};
pub use record::Record;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_takes_severity_from_category() {
        let error = Finding::new(Category::WrongEscape, "a.csv", 3, "bad escape");
        let warning = Finding::new(Category::Duplicate, "a.csv", 9, "duplicate");
        assert_eq!(error.severity, Severity::Error);
        assert!(error.is_error());
        assert_eq!(warning.severity, Severity::Warning);
        assert!(!warning.is_error());
    }

    #[test]
    fn finding_serializes_kebab_case_category() {
        let finding = Finding::new(Category::NonUtf8, "a.csv", 1, "invalid byte");
        let json = serde_json::to_value(&finding).expect("serialize finding");
        assert_eq!(json["category"], "non-utf8");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["line"], 1);
    }
}
