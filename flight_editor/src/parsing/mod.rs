//! Parsers turning validated dataset lines into flight records.
//!
//! # Example
//!
//! ```
//! use flight_editor::parsing::record_parser::parse_record;
//!
//! let record = parse_record("CD 34,LAX,JFK,150,0805,89.50,1,", 3).unwrap();
//! assert_eq!(record.departure.hour(), 8);
//! assert_eq!(record.departure.minutes(), 5);
//! ```

pub mod record_parser;


pub use record_parser::{parse_record, parse_records};
