//! Flight schedule editor core.
//!
//! Loads a comma-delimited flight schedule into an ordered in-memory store,
//! then sorts, searches, edits and writes it back in the same format.
//!
//! - [`io::loaders`]: validated file ingestion
//! - [`db::store`]: arena-backed ordered record store with stable handles
//! - [`transformations`]: adjacent-swap sorting and substring search
//! - [`session`]: interactive console driving the editor

pub mod config;
pub mod core;
pub mod db;
pub mod io;
pub mod parsing;
pub mod preprocessing;
pub mod session;
pub mod transformations;

pub use crate::config::EditorConfig;
pub use crate::core::{FlightRecord, SearchField, SortKey};
pub use crate::db::{FlightStore, RecordId};
pub use crate::io::{DatasetLoader, LoadOptions};
