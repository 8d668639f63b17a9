//! Domain model for a single flight schedule entry.
//!
//! A [`FlightRecord`] is the flat schema stored one-per-line in the dataset
//! file. Its departure time is kept split into hour and minutes and is only
//! re-joined into the `HHMM` token when the record is written back out.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{LoadError, LoadResult};

/// Maximum number of characters kept from the flight number field.
pub const FLIGHT_NUMBER_MAX_LEN: usize = 19;

/// Maximum number of characters kept from an airport code field.
pub const AIRPORT_CODE_MAX_LEN: usize = 4;

/// Departure time of a flight, split from a 4-digit `HHMM` token.
///
/// Ordering is by hour, then minutes, which matches comparing the
/// zero-padded token lexicographically.
///
/// # Examples
///
/// ```
/// use flight_editor::core::domain::DepartureTime;
///
/// let time = DepartureTime::from_token("0805", 2).unwrap();
/// assert_eq!((time.hour(), time.minutes()), (8, 5));
/// assert_eq!(time.to_token(), "0805");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DepartureTime {
    hour: u8,
    minutes: u8,
}

impl DepartureTime {
    /// Creates a departure time, returning `None` when either part is out of range.
    pub fn new(hour: u8, minutes: u8) -> Option<Self> {
        if hour <= 23 && minutes <= 59 {
            Some(Self { hour, minutes })
        } else {
            None
        }
    }

    /// Splits a 4-character token into hour (first two digits) and minutes
    /// (last two digits).
    ///
    /// Both halves are read as base-10 integers, so leading zeros are
    /// irrelevant. `line` is the 1-based source line used in the error.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TimeFormat`] if the token is not four ASCII
    /// digits, or if the hour is outside `[0, 23]` or the minutes outside
    /// `[0, 59]`.
    pub fn from_token(token: &str, line: usize) -> LoadResult<Self> {
        let invalid = || LoadError::TimeFormat {
            line,
            token: token.to_string(),
        };

        if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u8 = token[..2].parse().map_err(|_| invalid())?;
        let minutes: u8 = token[2..].parse().map_err(|_| invalid())?;

        Self::new(hour, minutes).ok_or_else(invalid)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Canonical zero-padded `HHMM` representation.
    pub fn to_token(&self) -> String {
        format!("{:02}{:02}", self.hour, self.minutes)
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minutes)
    }
}

/// One flight schedule entry.
///
/// Field widths follow the dataset format: the flight number holds at most
/// [`FLIGHT_NUMBER_MAX_LEN`] characters and airport codes at most
/// [`AIRPORT_CODE_MAX_LEN`]. Use [`FlightRecord::new`] to apply the
/// truncation when building records by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub capacity: u32,
    pub departure: DepartureTime,
    pub price: f64,
    pub stops: u8,
}

impl FlightRecord {
    /// Builds a record, truncating the string fields to their maximum widths.
    pub fn new(
        flight_number: &str,
        origin: &str,
        destination: &str,
        capacity: u32,
        departure: DepartureTime,
        price: f64,
        stops: u8,
    ) -> Self {
        Self {
            flight_number: truncate_chars(flight_number, FLIGHT_NUMBER_MAX_LEN),
            origin: truncate_chars(origin, AIRPORT_CODE_MAX_LEN),
            destination: truncate_chars(destination, AIRPORT_CODE_MAX_LEN),
            capacity,
            departure,
            price,
            stops,
        }
    }

    /// Price as written to the dataset file, with exactly two decimals.
    pub fn price_token(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// The price a save and reload gives back: [`price_token`](Self::price_token)
    /// parsed again.
    pub fn rounded_price(&self) -> f64 {
        self.price_token().parse().unwrap_or(self.price)
    }
}

pub(crate) fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
