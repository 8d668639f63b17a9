//! Structural validation of dataset lines.
//!
//! The validator is a gate in front of the record parser: it only decides
//! whether each line has the expected shape, it never builds records. The
//! first offending line aborts validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{LoadError, LoadResult};

/// Default byte limit for one line, excluding its terminator.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 256;

/// Data-line grammar: `CC[C] digits,ORIG,DEST,capacity,HHMM,price,stops[,]`.
static RECORD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9]{2,3} [0-9]+,[A-Z]+,[A-Z]+,[0-9]+,[0-9]{4},[0-9]+(\.[0-9]+)?,[0-9],?$")
        .expect("record line pattern is valid")
});

/// Validator for raw dataset lines.
///
/// # Examples
///
/// ```
/// use flight_editor::preprocessing::LineValidator;
///
/// let lines = [
///     "Flight number,origin,destination,capacity,departure time,price,stops,",
///     "AB 12,JFK,LAX,180,1230,199.99,0,",
/// ];
/// let count = LineValidator::new().validate(lines).unwrap();
/// assert_eq!(count, 1);
/// ```
#[derive(Debug, Clone)]
pub struct LineValidator {
    max_line_length: usize,
}

impl LineValidator {
    pub fn new() -> Self {
        Self::with_max_line_length(DEFAULT_MAX_LINE_LENGTH)
    }

    pub fn with_max_line_length(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Validates a whole file worth of lines, header first.
    ///
    /// The header (line 1) is exempt from the record grammar but must be
    /// neither blank nor over-long. Line terminators must already be
    /// stripped; a trailing `\r` is tolerated.
    ///
    /// # Returns
    ///
    /// The number of data records, i.e. the non-blank line count minus the
    /// header. An empty input has zero records.
    ///
    /// # Errors
    ///
    /// [`LoadError::LineTooLong`], [`LoadError::BlankLine`] or
    /// [`LoadError::Format`] for the first failing line.
    pub fn validate<I, S>(&self, lines: I) -> LoadResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut non_blank = 0usize;

        for (idx, line) in lines.into_iter().enumerate() {
            let line_no = idx + 1;
            let line = strip_cr(line.as_ref());

            if line_no == 1 {
                self.check_length(line, line_no)?;
                check_blank(line, line_no)?;
            } else {
                self.validate_line(line, line_no)?;
            }
            non_blank += 1;
        }

        Ok(non_blank.saturating_sub(1))
    }

    /// Validates one data line. `line_no` is only used for error reporting.
    pub fn validate_line(&self, line: &str, line_no: usize) -> LoadResult<()> {
        let line = strip_cr(line);
        self.check_length(line, line_no)?;
        check_blank(line, line_no)?;

        if !RECORD_LINE.is_match(line) {
            return Err(LoadError::Format {
                line: line_no,
                content: line.to_string(),
            });
        }
        Ok(())
    }

    fn check_length(&self, line: &str, line_no: usize) -> LoadResult<()> {
        if line.len() > self.max_line_length {
            return Err(LoadError::LineTooLong {
                line: line_no,
                length: line.len(),
                max: self.max_line_length,
            });
        }
        Ok(())
    }
}

impl Default for LineValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_blank(line: &str, line_no: usize) -> LoadResult<()> {
    if line.trim().is_empty() {
        return Err(LoadError::BlankLine { line: line_no });
    }
    Ok(())
}

pub(crate) fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
