use std::path::Path;
use tracing::info;

use super::table::QueryTable;
use crate::error::ExportError;
use crate::fs::atomic_write;

/// Writes `table` to `path` as CSV, without an index column.
pub fn export_csv(table: &QueryTable, path: &Path) -> Result<(), ExportError> {
    atomic_write(path, &table.to_csv()).map_err(|source| ExportError {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = table.row_count(), "result exported");
    Ok(())
}
