use crate::constants::CSV_HEADERS;
use crate::error::Result;
use crate::types::PlayerRow;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write the header and every row as CSV.
///
/// The header is always written, even for an empty row set.
pub fn write_rows<W: Write>(writer: W, rows: &[PlayerRow]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv(rows: &[PlayerRow], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_rows(file, rows)?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
