//! Pre-ingestion checks for dataset lines.
//!
//! - [`validator`]: line length, blank line and field grammar checks

pub mod validator;

#[cfg(test)]
mod validator_tests;

pub use validator::{LineValidator, DEFAULT_MAX_LINE_LENGTH};
