//! Quality report rendering and publishing.
//!
//! - `render`: human-readable summary and exit status
//! - `json`: machine-readable export of the same findings
//! - `output`: summary file and CI step-summary sink

mod error;
pub mod json;
pub mod output;
pub mod render;

pub use error::{ReportError, Result};
pub use json::{JsonReport, write_json};
pub use output::{
    DEFAULT_CI_SUMMARY_ENV, DEFAULT_SUMMARY_PATH, Published, ReportTarget, ci_summary_path,
    publish,
};
pub use render::{exit_code, render_summary};
