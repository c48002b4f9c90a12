use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

use super::table::{QueryTable, Value};
use crate::error::ExecutionError;

/// Outcome of running one query.
pub type ExecutionResult = std::result::Result<QueryTable, ExecutionError>;

/// Runs generated queries against the dataset.
///
/// Holds the one connection for the whole process. Failures come back as
/// [`ExecutionError`] values and leave the connection usable.
pub struct QueryExecutor {
    conn: Connection,
}

impl QueryExecutor {
    /// Opens an existing dataset read-only.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open dataset: {}", path.display()))?;

        debug!(path = %path.display(), "dataset opened");
        Ok(Self { conn })
    }

    pub const fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn execute(&self, query: &str) -> ExecutionResult {
        if query.trim().is_empty() {
            return Err(ExecutionError::Unexpected(
                "query text is empty".to_string(),
            ));
        }

        debug!(%query, "executing query");
        let result = self.run(query);

        match &result {
            Ok(table) => debug!(rows = table.row_count(), "query finished"),
            Err(err) => debug!(error = %err, "query failed"),
        }
        result
    }

    fn run(&self, query: &str) -> ExecutionResult {
        let mut stmt = self.conn.prepare(query)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let column_count = columns.len();

        let mut rows = stmt.query([])?;
        let mut collected = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(column_count);
            for index in 0..column_count {
                values.push(Value::from(row.get_ref(index)?));
            }
            collected.push(values);
        }

        Ok(QueryTable {
            columns,
            rows: collected,
        })
    }
}
