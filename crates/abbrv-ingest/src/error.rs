//! Error types for abbreviation list ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or loading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input directory does not exist or is not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV parser rejected a row.
    #[error("failed to parse {path} at line {line}: {message}")]
    CsvParse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::DirectoryNotFound {
            path: PathBuf::from("journals"),
        };
        assert_eq!(err.to_string(), "directory not found: journals");

        let err = IngestError::CsvParse {
            path: PathBuf::from("a.csv"),
            line: 7,
            message: "unexpected end".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse a.csv at line 7: unexpected end"
        );
    }
}
