use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::core::error::{LoadError, LoadResult};
use crate::db::store::FlightStore;
use crate::parsing::record_parser::parse_records;
use crate::preprocessing::validator::{LineValidator, DEFAULT_MAX_LINE_LENGTH};

/// Knobs for dataset ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Byte limit for one line, excluding its terminator.
    pub max_line_length: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Where a loaded dataset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Memory,
}

/// A fully loaded dataset.
#[derive(Debug)]
pub struct LoadReport {
    pub store: FlightStore,
    /// Lines in the input, header included.
    pub line_count: usize,
    pub source: DatasetSource,
}

impl LoadReport {
    pub fn record_count(&self) -> usize {
        self.store.len()
    }
}

/// Loads flight datasets into a [`FlightStore`].
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a dataset file.
    ///
    /// The file is read in full and closed before validation starts, so the
    /// handle is released on every path, including failures.
    ///
    /// # Errors
    ///
    /// [`LoadError::FileOpen`] if the file cannot be opened, otherwise the
    /// first read, length, blank line, format or time error found.
    pub fn load_from_file(path: &Path, options: &LoadOptions) -> LoadResult<LoadReport> {
        let lines = Self::read_lines(path, options)?;
        debug!("Read {} lines from {}", lines.len(), path.display());

        let store = Self::build_store(&lines, options)?;
        info!("Loaded {} records from {}", store.len(), path.display());

        Ok(LoadReport {
            store,
            line_count: lines.len(),
            source: DatasetSource::File(path.to_path_buf()),
        })
    }

    /// Load a dataset held in memory.
    pub fn load_from_str(text: &str, options: &LoadOptions) -> LoadResult<LoadReport> {
        let lines: Vec<&str> = text.lines().collect();
        let store = Self::build_store(&lines, options)?;

        Ok(LoadReport {
            store,
            line_count: lines.len(),
            source: DatasetSource::Memory,
        })
    }

    fn build_store<S: AsRef<str>>(lines: &[S], options: &LoadOptions) -> LoadResult<FlightStore> {
        let validator = LineValidator::with_max_line_length(options.max_line_length);
        let expected = validator.validate(lines.iter().map(AsRef::as_ref))?;
        let records = parse_records(lines.iter().skip(1).map(AsRef::as_ref), expected)?;
        Ok(FlightStore::from_records(records))
    }

    /// Read every line of `path` with a bounded buffer.
    ///
    /// A line longer than the configured limit is drained without being
    /// buffered and reported as [`LoadError::LineTooLong`].
    fn read_lines(path: &Path, options: &LoadOptions) -> LoadResult<Vec<String>> {
        let file = File::open(path).map_err(|source| LoadError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        let read_error = |source: io::Error| LoadError::Read {
            path: path.to_path_buf(),
            source,
        };

        // room for the content plus "\r\n"
        let limit = options.max_line_length + 2;
        let mut lines = Vec::new();
        let mut buf = Vec::with_capacity(limit);

        loop {
            buf.clear();
            let n = (&mut reader)
                .take(limit as u64)
                .read_until(b'\n', &mut buf)
                .map_err(read_error)?;
            if n == 0 {
                break;
            }

            let line_no = lines.len() + 1;
            let terminated = buf.last() == Some(&b'\n');
            if !terminated && n == limit {
                let pending_cr = buf.last() == Some(&b'\r');
                let (rest, crlf) = drain_line(&mut reader, pending_cr).map_err(read_error)?;
                return Err(LoadError::LineTooLong {
                    line: line_no,
                    length: n + rest - usize::from(crlf),
                    max: options.max_line_length,
                });
            }

            if terminated {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            let line = String::from_utf8(buf.clone())
                .map_err(|e| read_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
            lines.push(line);
        }

        Ok(lines)
    }
}

/// Consume the remainder of the current line.
///
/// Returns the number of bytes consumed before the `\n` and whether the line
/// ended in `\r\n`. `pending_cr` says the byte just before the remainder was
/// a `\r`, which pairs with a `\n` at the very start of the remainder.
fn drain_line<R: BufRead>(reader: &mut R, pending_cr: bool) -> io::Result<(usize, bool)> {
    let mut length = 0;
    let mut last_was_cr = pending_cr;
    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            return Ok((length, false));
        }
        match chunk.iter().position(|b| *b == b'\n') {
            Some(pos) => {
                let crlf = if pos > 0 { chunk[pos - 1] == b'\r' } else { last_was_cr };
                length += pos;
                reader.consume(pos + 1);
                return Ok((length, crlf));
            }
            None => {
                let len = chunk.len();
                last_was_cr = chunk[len - 1] == b'\r';
                length += len;
                reader.consume(len);
            }
        }
    }
}
