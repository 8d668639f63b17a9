//! In-memory record store.
//!
//! The store keeps flight records in a doubly-linked total order backed by an
//! arena of slots. Records are addressed by generational [`RecordId`] handles
//! that stay valid while the record lives, whatever its position.

pub mod store;


pub use store::{FlightStore, RecordId};
