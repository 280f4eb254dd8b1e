//! Flat CSV export of scenario results

use std::fs::File;
use std::io::Write;
use std::path::Path;

use common::error::{Error, ErrorExt, Result};
use common::model::scenario::{ScenarioResult, CSV_COLUMNS};
use tracing::info;

/// Write a header row and one row per result, CRLF terminated. The header
/// is written even when there are no results.
pub fn export_csv<W: Write>(writer: W, results: &[ScenarioResult]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv.write_record(CSV_COLUMNS)?;
    for result in results {
        csv.serialize(result)?;
    }
    csv.flush()?;

    Ok(())
}

/// Export results to `path`, replacing any existing file
pub fn export_csv_file(path: impl AsRef<Path>, results: &[ScenarioResult]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(Error::from)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    export_csv(file, results)?;
    info!("Exported {} results to {}", results.len(), path.display());
    Ok(())
}
