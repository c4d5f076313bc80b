//! Record loading with strict UTF-8 decoding and standard CSV quoting.

use std::path::Path;

use abbrv_model::Record;
use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Options for parsing an abbreviation list.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Field delimiter (`,` for the quality checks, `;` for combined lists).
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Result of loading one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File decoded and parsed; records are in source order.
    Records(Vec<Record>),
    /// File is not valid UTF-8. No records are produced.
    Undecodable {
        /// 1-indexed line holding the first invalid byte sequence.
        line: usize,
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },
}

/// Reads `path`, decodes it as UTF-8 and parses its records.
///
/// A decoding failure is not an error: it is reported as
/// [`LoadOutcome::Undecodable`] so the caller can record it and move on.
pub fn load_records(path: &Path, options: &LoadOptions) -> Result<LoadOutcome> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let text = match std::str::from_utf8(&bytes) {
        Ok(text) => text,
        Err(err) => {
            let offset = err.valid_up_to();
            let line = bytes[..offset].iter().filter(|b| **b == b'\n').count() + 1;
            warn!(path = %path.display(), line, offset, "file is not valid UTF-8");
            return Ok(LoadOutcome::Undecodable { line, offset });
        }
    };

    let records = parse_records(text, options.delimiter, path)?;
    debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(LoadOutcome::Records(records))
}

/// Parses decoded text into records, keeping each record's starting line.
///
/// Rows may have any number of fields. Blank rows are skipped. A quoted
/// field that is never closed is rejected, as the reader would otherwise
/// swallow the rest of the file into it.
pub fn parse_records(text: &str, delimiter: u8, path: &Path) -> Result<Vec<Record>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if let Some(line) = unterminated_quote_line(text, delimiter) {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            line,
            message: format!("unterminated quoted field starting on line {line}"),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|err| IngestError::CsvParse {
            path: path.to_path_buf(),
            line: err
                .position()
                .and_then(|pos| usize::try_from(pos.line()).ok())
                .unwrap_or(0),
            message: err.to_string(),
        })?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        let line = row
            .position()
            .and_then(|pos| usize::try_from(pos.line()).ok())
            .unwrap_or(records.len() + 1);
        records.push(Record::new(line, row.iter().map(String::from).collect()));
    }
    Ok(records)
}

/// Line on which a still-open quoted field started, if any.
///
/// Follows the reader's quoting rules: a quote opens a field only at the
/// start of the field, and `""` inside a quoted field is a literal quote.
fn unterminated_quote_line(text: &str, delimiter: u8) -> Option<usize> {
    let mut line = 1;
    let mut open_since = None;
    let mut field_start = true;
    let mut bytes = text.bytes().peekable();
    while let Some(byte) = bytes.next() {
        if open_since.is_some() {
            if byte == b'"' {
                if bytes.peek() == Some(&b'"') {
                    bytes.next();
                } else {
                    open_since = None;
                }
            }
        } else if byte == b'"' && field_start {
            open_since = Some(line);
        }
        if open_since.is_none() {
            field_start = byte == delimiter || byte == b'\n' || byte == b'\r';
        }
        if byte == b'\n' {
            line += 1;
        }
    }
    open_since
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_parse_quoted_fields() {
        let text = "\"Journal, of Things\",J. Things\n\"Say \"\"Hi\"\"\",Say Hi\n";
        let records = parse_records(text, b',', Path::new("t.csv")).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pair(), Some(("Journal, of Things", "J. Things")));
        assert_eq!(records[1].full_name(), Some("Say \"Hi\""));
    }

    #[test]
    fn test_line_numbers_follow_source() {
        let text = "A,A.\n\"Multi\nline\",M.\nC,C.\n";
        let records = parse_records(text, b',', Path::new("t.csv")).unwrap();
        let lines: Vec<usize> = records.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 2, 4]);
    }

    #[test]
    fn test_semicolon_delimiter_and_extra_fields() {
        let text = "Acta Math.;Acta Math;AM;12\n";
        let records = parse_records(text, b';', Path::new("t.csv")).unwrap();
        assert_eq!(records[0].fields.len(), 4);
    }

    #[test]
    fn test_bom_is_stripped() {
        let text = "\u{feff}Nature,Nature\n";
        let records = parse_records(text, b',', Path::new("t.csv")).unwrap();
        assert_eq!(records[0].full_name(), Some("Nature"));
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let file = create_temp_file(b"Nature,Nature\nBad \xff Name,B. N.\n");
        let outcome = load_records(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(outcome, LoadOutcome::Undecodable { line: 2, offset: 18 });
    }

    #[test]
    fn test_unterminated_quote_reports_opening_line() {
        let text = "Nature,Nature\n\"Broken Journal,B. J.\nOptics Letters,Opt. Lett.\n";
        let err = parse_records(text, b',', Path::new("t.csv")).unwrap_err();
        match err {
            IngestError::CsvParse { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("unterminated"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_closed_and_inner_quotes_are_accepted() {
        assert_eq!(unterminated_quote_line("\"\"\"Quoted\",Q.\n", b','), None);
        assert_eq!(unterminated_quote_line("Journal \"Inner,J. I.\n", b','), None);
        assert_eq!(unterminated_quote_line("\"Multi\nline\",M.\n", b','), None);
        assert_eq!(unterminated_quote_line("A;B\nC;\"open\n", b';'), Some(2));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("absent.csv"), &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}
