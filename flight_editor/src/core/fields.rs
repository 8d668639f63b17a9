//! Attribute selectors for sorting and searching.
//!
//! Each selector resolves once per operation into a plain function value
//! (a comparator for [`SortKey`], a key extractor for [`SearchField`]), so the
//! per-record loops never re-dispatch on the selector.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::domain::FlightRecord;

/// Comparator over two records.
pub type RecordComparator = fn(&FlightRecord, &FlightRecord) -> Ordering;

/// Extracts a string attribute from a record.
pub type KeyExtractor = fn(&FlightRecord) -> &str;

/// Attribute a store can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    FlightNumber,
    Origin,
    Destination,
    Capacity,
    DepartureTime,
    Price,
    Stops,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::FlightNumber,
        SortKey::Origin,
        SortKey::Destination,
        SortKey::Capacity,
        SortKey::DepartureTime,
        SortKey::Price,
        SortKey::Stops,
    ];

    /// Returns the ascending comparator for this attribute.
    ///
    /// Strings compare by bytes, numbers numerically. Prices use a total
    /// order so the comparison stays transitive for any pair of values.
    pub fn comparator(self) -> RecordComparator {
        match self {
            SortKey::FlightNumber => {
                |a, b| a.flight_number.as_bytes().cmp(b.flight_number.as_bytes())
            }
            SortKey::Origin => |a, b| a.origin.as_bytes().cmp(b.origin.as_bytes()),
            SortKey::Destination => |a, b| a.destination.as_bytes().cmp(b.destination.as_bytes()),
            SortKey::Capacity => |a, b| a.capacity.cmp(&b.capacity),
            SortKey::DepartureTime => |a, b| a.departure.cmp(&b.departure),
            SortKey::Price => |a, b| a.price.total_cmp(&b.price),
            SortKey::Stops => |a, b| a.stops.cmp(&b.stops),
        }
    }

    /// Short name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            SortKey::FlightNumber => "flight",
            SortKey::Origin => "origin",
            SortKey::Destination => "destination",
            SortKey::Capacity => "capacity",
            SortKey::DepartureTime => "time",
            SortKey::Price => "price",
            SortKey::Stops => "stops",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flight" | "flight_number" | "number" => Ok(SortKey::FlightNumber),
            "origin" | "from" => Ok(SortKey::Origin),
            "destination" | "dest" | "to" => Ok(SortKey::Destination),
            "capacity" => Ok(SortKey::Capacity),
            "time" | "departure" | "departure_time" => Ok(SortKey::DepartureTime),
            "price" => Ok(SortKey::Price),
            "stops" => Ok(SortKey::Stops),
            other => Err(format!(
                "Unknown sort key: {}. Use flight, origin, destination, capacity, \
                 time, price or stops",
                other
            )),
        }
    }
}

/// String attribute a store can be searched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    FlightNumber,
    Origin,
    Destination,
}

impl SearchField {
    pub fn extractor(self) -> KeyExtractor {
        match self {
            SearchField::FlightNumber => flight_number_of,
            SearchField::Origin => origin_of,
            SearchField::Destination => destination_of,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SearchField::FlightNumber => "flight",
            SearchField::Origin => "origin",
            SearchField::Destination => "destination",
        }
    }
}

fn flight_number_of(record: &FlightRecord) -> &str {
    &record.flight_number
}

fn origin_of(record: &FlightRecord) -> &str {
    &record.origin
}

fn destination_of(record: &FlightRecord) -> &str {
    &record.destination
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flight" | "flight_number" | "number" => Ok(SearchField::FlightNumber),
            "origin" | "from" => Ok(SearchField::Origin),
            "destination" | "dest" | "to" => Ok(SearchField::Destination),
            other => Err(format!(
                "Unknown search field: {}. Use flight, origin or destination",
                other
            )),
        }
    }
}
