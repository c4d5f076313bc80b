use serde::{Deserialize, Serialize};

/// One parsed line of an abbreviation list.
///
/// Field 0 is the full journal name and field 1 its abbreviation. Any
/// further fields (shortest abbreviation, frequency, ...) are carried along
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-indexed source line the record starts on.
    pub line: usize,
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn full_name(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    pub fn abbreviation(&self) -> Option<&str> {
        self.fields.get(1).map(String::as_str)
    }

    /// Full name and abbreviation, or `None` for records with fewer than two fields.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.full_name()?, self.abbreviation()?))
    }

    /// All fields joined with a comma, for messages.
    pub fn joined(&self) -> String {
        self.fields.join(",")
    }
}
