//! Library surface of the `abbrv` command-line tool.

pub mod check;
pub mod combine;
pub mod logging;
