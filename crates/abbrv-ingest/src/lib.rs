//! Abbreviation list ingestion.
//!
//! # Features
//!
//! - **Discovery**: List the delimited files of an input directory in file-name order
//! - **Loading**: Decode a file as UTF-8 and parse it into [`Record`]s with standard CSV quoting
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use abbrv_ingest::{LoadOptions, LoadOutcome, list_input_files, load_records};
//!
//! for path in list_input_files(Path::new("journals"), "csv")? {
//!     match load_records(&path, &LoadOptions::default())? {
//!         LoadOutcome::Records(records) => println!("{}: {}", path.display(), records.len()),
//!         LoadOutcome::Undecodable { line, .. } => println!("{}: bad UTF-8 at line {line}", path.display()),
//!     }
//! }
//! ```
//!
//! [`Record`]: abbrv_model::Record

mod discovery;
mod error;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{file_label, list_input_files};

// === Record Loading ===
pub use loader::{LoadOptions, LoadOutcome, load_records, parse_records};
