//! The SQLite dataset: schema, query execution, result tables and CSV export.

mod executor;
mod export;
mod schema;
mod table;

pub use executor::{ExecutionResult, QueryExecutor};
pub use export::export_csv;
pub use schema::{SCHEMA_DESCRIPTION, TABLE_NAME};
pub use table::{QueryTable, Value};
