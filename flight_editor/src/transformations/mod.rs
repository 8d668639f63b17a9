//! Store-wide query and reordering operations.
//!
//! # Modules
//!
//! - [`sorting`]: in-place ascending sort by one attribute
//! - [`search`]: substring search producing an ordered snapshot of handles
//!
//! # Example
//!
//! ```
//! use flight_editor::core::{SearchField, SortKey};
//! use flight_editor::io::DatasetLoader;
//! use flight_editor::transformations::{search_store, sort_store};
//!
//! let text = "Flight number,origin,destination,capacity,departure time,price,stops,\n\
//!             AB 12,JFK,LAX,180,1230,199.99,0,\n\
//!             CD 34,LAX,JFK,150,0805,89.50,1,\n";
//! let mut store = DatasetLoader::load_from_str(text, &Default::default()).unwrap().store;
//!
//! sort_store(&mut store, SortKey::Price);
//! assert_eq!(store.get_at(0).unwrap().flight_number, "CD 34");
//!
//! let found = search_store(&store, SearchField::Origin, "JF");
//! assert_eq!(found.match_count(), 1);
//! ```

pub mod search;
pub mod sorting;

#[cfg(test)]
mod search_tests;

pub use search::{search_store, SearchOutcome, SearchView};
pub use sorting::{sort_store, SortReport};
