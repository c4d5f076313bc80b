//! Validation findings.
//!
//! Every detected data-quality problem becomes a [`Finding`]; nothing in
//! the validation path raises an error for bad data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Finding severity. Only errors fail a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Breaks downstream consumers; fails the run.
    Error,
    /// Degrades quality; reported only.
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Finding category.
///
/// Declaration order is the order categories are listed in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// File could not be read at all.
    Unreadable,
    /// File or field is not valid UTF-8.
    #[serde(rename = "non-utf8")]
    NonUtf8,
    /// The CSV parser rejected a row.
    MalformedRow,
    /// Backslash sequence outside the allowed escape set.
    WrongEscape,
    /// Full name starts with a literal double quote.
    LeadingQuote,
    /// Abbreviation is not a plausible derivation of the full name.
    ImplausibleAbbreviation,
    /// Full name or abbreviation already seen earlier in the file.
    Duplicate,
    /// Multi-word full name identical to its abbreviation.
    FullFormIdentical,
    /// Legacy spelling such as `Manage.` instead of `Manag.`.
    OutdatedAbbreviation,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Unreadable,
        Category::NonUtf8,
        Category::MalformedRow,
        Category::WrongEscape,
        Category::LeadingQuote,
        Category::ImplausibleAbbreviation,
        Category::Duplicate,
        Category::FullFormIdentical,
        Category::OutdatedAbbreviation,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unreadable => "Unreadable file",
            Self::NonUtf8 => "Non-UTF8",
            Self::MalformedRow => "Malformed row",
            Self::WrongEscape => "Wrong escape",
            Self::LeadingQuote => "Leading quote",
            Self::ImplausibleAbbreviation => "Implausible abbreviation",
            Self::Duplicate => "Duplicate",
            Self::FullFormIdentical => "Full form identical",
            Self::OutdatedAbbreviation => "Outdated abbreviation",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Unreadable
            | Self::NonUtf8
            | Self::MalformedRow
            | Self::WrongEscape
            | Self::LeadingQuote
            | Self::ImplausibleAbbreviation => Severity::Error,
            Self::Duplicate | Self::FullFormIdentical | Self::OutdatedAbbreviation => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One validation result for one line of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: Category,
    pub severity: Severity,
    /// File name the finding was raised for.
    pub file: String,
    /// 1-indexed source line.
    pub line: usize,
    pub message: String,
}

impl Finding {
    /// Create a finding with the category's severity.
    pub fn new(
        category: Category,
        file: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity: category.severity(),
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
