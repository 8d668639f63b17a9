use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{info, warn};

use crate::config::EditorConfig;
use crate::core::domain::FlightRecord;
use crate::core::error::{LoadError, StoreError};
use crate::db::store::FlightStore;
use crate::io::writer::save_to_file;
use crate::parsing::record_parser::parse_record;
use crate::preprocessing::validator::LineValidator;
use crate::session::command::{Command, USAGE};
use crate::transformations::search::{search_store, SearchOutcome, SearchView};
use crate::transformations::sorting::sort_store;

const PROMPT: &str = "> ";

/// What the console loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Editing session over one loaded dataset.
///
/// Owns the store and remembers where it came from so `save` writes back to
/// the same file. Positions shown to the user are 0-based.
pub struct EditorSession {
    store: FlightStore,
    path: PathBuf,
    page_rows: usize,
    offset: usize,
    dirty: bool,
    last_search: Option<SearchView>,
    validator: LineValidator,
}

impl EditorSession {
    pub fn new(store: FlightStore, path: impl Into<PathBuf>, page_rows: usize) -> Self {
        Self {
            store,
            path: path.into(),
            page_rows: page_rows.max(1),
            offset: 0,
            dirty: false,
            last_search: None,
            validator: LineValidator::new(),
        }
    }

    pub fn from_config(store: FlightStore, config: &EditorConfig) -> Self {
        let mut session = Self::new(store, config.dataset.path.clone(), config.display.page_rows);
        session.validator = LineValidator::with_max_line_length(config.dataset.max_line_length);
        session
    }

    pub fn store(&self) -> &FlightStore {
        &self.store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True when the store differs from what was last loaded or saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Matches of the last search, until the store is next modified.
    pub fn last_search(&self) -> Option<&SearchView> {
        self.last_search.as_ref()
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Command failures are reported on `output` and the loop goes on; only
    /// failures to read input or write output end the session with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(
            output,
            "{} flights loaded from {}. Type `help` for commands.",
            self.store.len(),
            self.path.display()
        )?;
        self.render_page(&mut output)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line.context("Failed to read command")?,
                None => break,
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match self.execute(command, &mut output) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!("Command failed: {:#}", e);
                    writeln!(output, "Error: {:#}", e)?;
                }
            }
        }

        if self.dirty {
            warn!("Session ended with unsaved changes to {}", self.path.display());
        }
        output.flush()?;
        Ok(())
    }

    /// Execute one command, writing its feedback to `output`.
    ///
    /// A failed command leaves the store unchanged.
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<Flow> {
        match command {
            Command::List { offset } => {
                if let Some(offset) = offset {
                    self.offset = offset;
                }
                self.clamp_offset();
                self.render_page(output)?;
            }
            Command::Next => {
                if self.offset + self.page_rows < self.store.len() {
                    self.offset += self.page_rows;
                }
                self.render_page(output)?;
            }
            Command::Prev => {
                self.offset = self.offset.saturating_sub(self.page_rows);
                self.render_page(output)?;
            }
            Command::Search { field, query } => match search_store(&self.store, field, &query) {
                SearchOutcome::EmptyQuery => return Err(StoreError::EmptyQuery.into()),
                SearchOutcome::NoMatch => {
                    self.last_search = None;
                    writeln!(output, "No flights match {:?} in {}", query, field)?;
                }
                SearchOutcome::Matches(view) => {
                    writeln!(output, "{} match(es) for {:?} in {}", view.len(), query, field)?;
                    write_table_header(output)?;
                    for id in view.ids() {
                        if let (Some(position), Some(record)) =
                            (self.store.position_of(*id), self.store.get(*id))
                        {
                            write_row(output, position, record)?;
                        }
                    }
                    self.last_search = Some(view);
                }
            },
            Command::Sort(key) => {
                let report = sort_store(&mut self.store, key);
                if report.swaps > 0 {
                    self.mark_modified();
                }
                self.offset = 0;
                writeln!(output, "Sorted {} flights by {}", self.store.len(), key)?;
                self.render_page(output)?;
            }
            Command::Insert { position, line } => {
                let record = self.parse_user_record(&line)?;
                let flight = record.flight_number.clone();
                self.store.insert_at(position, record)?;
                self.mark_modified();
                info!("Inserted {} at position {}", flight, position);
                writeln!(output, "Inserted {} at position {}", flight, position)?;
            }
            Command::Append { line } => {
                let record = self.parse_user_record(&line)?;
                let flight = record.flight_number.clone();
                self.store.append(record);
                self.mark_modified();
                writeln!(
                    output,
                    "Appended {} at position {}",
                    flight,
                    self.store.len() - 1
                )?;
            }
            Command::Delete { position } => {
                let removed = self.store.delete_at(position)?;
                self.mark_modified();
                self.clamp_offset();
                info!("Deleted {} from position {}", removed.flight_number, position);
                writeln!(
                    output,
                    "Deleted {} from position {}",
                    removed.flight_number, position
                )?;
            }
            Command::Update { position, line } => {
                let record = self.parse_user_record(&line)?;
                let flight = record.flight_number.clone();
                self.store.update_at(position, record)?;
                self.mark_modified();
                writeln!(output, "Updated position {} with {}", position, flight)?;
            }
            Command::Save => {
                let count = save_to_file(&self.store, &self.path)?;
                self.dirty = false;
                writeln!(output, "Saved {} flights to {}", count, self.path.display())?;
            }
            Command::Quit { force } => {
                if self.dirty && !force {
                    writeln!(
                        output,
                        "There are unsaved changes. Use `save` first or `quit!` to discard them."
                    )?;
                    return Ok(Flow::Continue);
                }
                return Ok(Flow::Quit);
            }
            Command::Help => writeln!(output, "{}", USAGE)?,
        }
        Ok(Flow::Continue)
    }

    /// Check a record typed by the user against the dataset grammar.
    fn parse_user_record(&self, line: &str) -> Result<FlightRecord> {
        let checked = self
            .validator
            .validate_line(line, 0)
            .and_then(|_| parse_record(line, 0));

        match checked {
            Ok(record) => Ok(record),
            Err(LoadError::BlankLine { .. }) => bail!("Record is empty"),
            Err(LoadError::LineTooLong { length, max, .. }) => {
                bail!("Record is {} bytes long, limit is {}", length, max)
            }
            Err(LoadError::TimeFormat { token, .. }) => {
                bail!("Invalid departure time {:?}, expected HHMM", token)
            }
            Err(LoadError::Format { content, .. }) => bail!(
                "Malformed record {:?}, expected e.g. AB 12,JFK,LAX,180,1230,199.99,0,",
                content
            ),
            Err(e) => Err(e.into()),
        }
    }

    fn mark_modified(&mut self) {
        self.dirty = true;
        self.last_search = None;
    }

    fn clamp_offset(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.offset = 0;
        } else if self.offset >= len {
            self.offset = (len - 1) / self.page_rows * self.page_rows;
        }
    }

    fn render_page<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.store.is_empty() {
            writeln!(output, "(no flights)")?;
            return Ok(());
        }

        write_table_header(output)?;
        let mut shown = 0usize;
        for record in self.store.iter_from(self.offset).take(self.page_rows) {
            write_row(output, self.offset + shown, record)?;
            shown += 1;
        }
        writeln!(
            output,
            "Rows {}-{} of {}{}",
            self.offset,
            self.offset + shown.saturating_sub(1),
            self.store.len(),
            if self.dirty { " (modified)" } else { "" }
        )?;
        Ok(())
    }
}

fn write_table_header<W: Write>(output: &mut W) -> Result<()> {
    writeln!(
        output,
        "{:>5}  {:<19}  {:<4}  {:<4}  {:>8}  {:>5}  {:>10}  {:>5}",
        "#", "Flight", "From", "To", "Capacity", "Time", "Price", "Stops"
    )?;
    Ok(())
}

fn write_row<W: Write>(output: &mut W, position: usize, record: &FlightRecord) -> Result<()> {
    writeln!(
        output,
        "{:>5}  {:<19}  {:<4}  {:<4}  {:>8}  {:>5}  {:>10.2}  {:>5}",
        position,
        record.flight_number,
        record.origin,
        record.destination,
        record.capacity,
        record.departure.to_string(),
        record.price,
        record.stops
    )?;
    Ok(())
}
