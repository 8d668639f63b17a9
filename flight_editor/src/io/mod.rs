//! Dataset file input and output.
//!
//! Loading runs open → read → validate → parse → store and hands back either
//! a complete store or the first fatal error. Saving rewrites the whole file
//! from the store's current order.
//!
//! # Example
//!
//! ```no_run
//! use flight_editor::io::{save_to_file, DatasetLoader, LoadOptions};
//! use std::path::Path;
//!
//! let report = DatasetLoader::load_from_file(Path::new("dataset.txt"), &LoadOptions::default())
//!     .expect("Failed to load");
//! println!("Loaded {} flights", report.store.len());
//! save_to_file(&report.store, Path::new("dataset.txt")).expect("Failed to save");
//! ```

pub mod loaders;
pub mod writer;

#[cfg(test)]
mod writer_tests;

pub use loaders::{DatasetLoader, DatasetSource, LoadOptions, LoadReport};
pub use writer::{render_record, save_to_file, serialize_store, write_store, HEADER};
