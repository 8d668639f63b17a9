//! Core domain models for the flight schedule editor.
//!
//! This module defines the flight record schema, the attribute selectors used
//! by sorting and searching, and the error taxonomy shared by the loader and
//! the store.

pub mod domain;
pub mod error;
pub mod fields;

#[cfg(test)]
mod fields_tests;

pub use domain::{DepartureTime, FlightRecord};
pub use error::{LoadError, LoadResult, StoreError, StoreResult};
pub use fields::{SearchField, SortKey};
