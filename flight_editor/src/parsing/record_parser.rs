use crate::core::domain::{
    truncate_chars, DepartureTime, FlightRecord, AIRPORT_CODE_MAX_LEN, FLIGHT_NUMBER_MAX_LEN,
};
use crate::core::error::{LoadError, LoadResult};
use crate::preprocessing::validator::strip_cr;

const FIELD_COUNT: usize = 7;

/// Parse one data line into a [`FlightRecord`].
///
/// The line is expected to have passed the validator; anything that still
/// does not fit the schema (missing fields, a capacity beyond `u32`) is
/// reported as [`LoadError::Format`]. `line_no` is the 1-based source line.
pub fn parse_record(line: &str, line_no: usize) -> LoadResult<FlightRecord> {
    let line = strip_cr(line);
    let format_error = || LoadError::Format {
        line: line_no,
        content: line.to_string(),
    };

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < FIELD_COUNT {
        return Err(format_error());
    }

    let capacity: u32 = fields[3].parse().map_err(|_| format_error())?;
    let departure = DepartureTime::from_token(fields[4], line_no)?;
    let price: f64 = fields[5].parse().map_err(|_| format_error())?;
    let stops: u8 = fields[6].parse().map_err(|_| format_error())?;

    Ok(FlightRecord {
        flight_number: truncate_chars(fields[0], FLIGHT_NUMBER_MAX_LEN),
        origin: truncate_chars(fields[1], AIRPORT_CODE_MAX_LEN),
        destination: truncate_chars(fields[2], AIRPORT_CODE_MAX_LEN),
        capacity,
        departure,
        price,
        stops,
    })
}

/// Parse the header-skipped body of a dataset into records, preserving order.
///
/// `expected` is the record count reported by the validator; it only sizes
/// the output. Line numbers in errors account for the skipped header, so the
/// first body line is reported as line 2.
pub fn parse_records<I, S>(lines: I, expected: usize) -> LoadResult<Vec<FlightRecord>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::with_capacity(expected);

    for (idx, line) in lines.into_iter().enumerate() {
        records.push(parse_record(line.as_ref(), idx + 2)?);
    }

    if records.len() != expected {
        log::warn!(
            "Parsed {} records but validation counted {}",
            records.len(),
            expected
        );
    }

    Ok(records)
}
