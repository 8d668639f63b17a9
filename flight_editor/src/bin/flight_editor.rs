//! Flight schedule editor.
//!
//! Loads a dataset file and opens an interactive editing console on
//! stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! flight-editor --file dataset.txt
//! flight-editor --config ./flight_editor.toml --page-rows 40
//! ```
//!
//! Settings come from `flight_editor.toml` when present; command-line flags
//! override them. Logs go to stderr.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: warn)

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flight_editor::config::{ConfigError, EditorConfig};
use flight_editor::io::DatasetLoader;
use flight_editor::session::EditorSession;

const EXIT_FAILURE: u8 = 1;
const EXIT_LOAD_FAILURE: u8 = 2;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive flight schedule editor")]
struct Args {
    /// Dataset file to open.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Configuration file. Defaults to flight_editor.toml in the usual places.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rows shown per page.
    #[arg(long)]
    page_rows: Option<usize>,

    /// Longest accepted line in bytes.
    #[arg(long)]
    max_line_length: Option<usize>,
}

impl Args {
    fn to_config(&self) -> Result<EditorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => EditorConfig::from_file(path)?,
            None => EditorConfig::from_default_location()?,
        };

        if let Some(file) = &self.file {
            config.dataset.path = file.clone();
        }
        if let Some(page_rows) = self.page_rows {
            config.display.page_rows = page_rows;
        }
        if let Some(max_line_length) = self.max_line_length {
            config.dataset.max_line_length = max_line_length;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let report = match DatasetLoader::load_from_file(&config.dataset.path, &config.load_options()) {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to load dataset: {e}");
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_LOAD_FAILURE);
        }
    };
    info!(
        "Loaded {} flights from {}",
        report.record_count(),
        config.dataset.path.display()
    );

    let mut session = EditorSession::from_config(report.store, &config);
    let stdin = io::stdin();
    if let Err(e) = session.run(stdin.lock(), io::stdout().lock()) {
        error!("Session aborted: {e:?}");
        eprintln!("Error: {e:#}");
        return ExitCode::from(EXIT_FAILURE);
    }

    ExitCode::SUCCESS
}
