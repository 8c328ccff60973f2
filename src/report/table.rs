//! Summary table as CSV.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

use crate::analysis::SeasonSummaryRow;
use crate::Result;

/// Write `rows` with a header line. Missing values become empty fields.
pub fn write_csv_to<W: Write>(rows: &[SeasonSummaryRow], wtr: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(wtr);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the summary table to `path`, creating parent directories.
pub fn write_csv(rows: &[SeasonSummaryRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_csv_to(rows, fs::File::create(path)?)?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn read_csv_from<R: Read>(rdr: R) -> Result<Vec<SeasonSummaryRow>> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Load a table previously written by [`write_csv`].
pub fn read_csv(path: &Path) -> Result<Vec<SeasonSummaryRow>> {
    read_csv_from(fs::File::open(path)?)
}
