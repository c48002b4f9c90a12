//! The one queryable table.

/// Name of the table holding the daily price records.
pub const TABLE_NAME: &str = "AAPL_daily";

/// Schema description embedded in every translation prompt.
pub const SCHEMA_DESCRIPTION: &str = "\
Table: AAPL_daily
Columns:
- Date (text): The date of the record.
- Time (text): The time of the record.
- Open (double precision): The opening price of the stock.
- High (double precision): The highest price of the stock.
- Low (double precision): The lowest price of the stock.
- Close (double precision): The closing price of the stock.
- Volume (bigint): The volume of stock traded.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_table_and_columns() {
        assert!(SCHEMA_DESCRIPTION.contains(TABLE_NAME));
        for column in ["Date", "Time", "Open", "High", "Low", "Close", "Volume"] {
            assert!(
                SCHEMA_DESCRIPTION.contains(&format!("- {column} (")),
                "missing column {column}"
            );
        }
    }
}
