use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::domain::FlightRecord;
use crate::db::store::FlightStore;

/// Fixed header line of the dataset format.
pub const HEADER: &str = "Flight number,origin,destination,capacity,departure time,price,stops,";

/// Render one record as a dataset line, without terminator.
///
/// The departure time is written as a zero-padded `HHMM` token and the price
/// with exactly two decimals, so prices round-trip only to the cent.
pub fn render_record(record: &FlightRecord) -> String {
    format!(
        "{},{},{},{},{},{},{},",
        record.flight_number,
        record.origin,
        record.destination,
        record.capacity,
        record.departure.to_token(),
        record.price_token(),
        record.stops
    )
}

/// Header followed by one line per record, in traversal order.
pub fn serialize_store(store: &FlightStore) -> Vec<String> {
    let mut lines = Vec::with_capacity(store.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(store.iter().map(render_record));
    lines
}

/// Write the serialized store to `writer`, one `\n`-terminated line each.
pub fn write_store<W: Write>(store: &FlightStore, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "{}", HEADER)?;
    for record in store.iter() {
        writeln!(writer, "{}", render_record(record))?;
    }
    writer.flush()
}

/// Overwrite `path` with the serialized store.
///
/// The file is truncated and rewritten from the start, and flushed before
/// returning. Returns the number of records written.
pub fn save_to_file(store: &FlightStore, path: &Path) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;
    write_store(store, BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {} records to {}", store.len(), path.display());
    Ok(store.len())
}
