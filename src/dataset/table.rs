use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use std::fmt;

/// One cell of a result row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Field text for CSV output. NULL becomes an empty field.
    fn csv_field(&self) -> String {
        match self {
            Self::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl From<rusqlite::types::ValueRef<'_>> for Value {
    fn from(value: rusqlite::types::ValueRef<'_>) -> Self {
        use rusqlite::types::ValueRef;

        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(i) => Self::Integer(i),
            ValueRef::Real(f) => Self::Real(f),
            ValueRef::Text(bytes) => Self::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Self::Blob(bytes.to_vec()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Integer(i) => write!(f, "{i}"),
            // Whole numbers keep one decimal so prices read as prices
            Self::Real(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Real(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Blob(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

/// A query result: ordered columns and ordered rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryTable {
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub const fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Renders every row and column as a terminal table.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(self.columns.iter().map(Cell::new));

        for row in &self.rows {
            table.add_row(row.iter().map(|value| {
                let cell = Cell::new(value);
                if value.is_numeric() {
                    cell.set_alignment(CellAlignment::Right)
                } else {
                    cell
                }
            }));
        }

        table.to_string()
    }

    /// Serializes the table as CSV with a header line.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        push_csv_record(&mut out, self.columns.iter().map(String::as_str));
        for row in &self.rows {
            let fields: Vec<String> = row.iter().map(Value::csv_field).collect();
            push_csv_record(&mut out, fields.iter().map(String::as_str));
        }
        out
    }
}

fn push_csv_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        if field.contains([',', '"', '\n', '\r']) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> QueryTable {
        QueryTable {
            columns: vec!["Date".to_string(), "Highest Close".to_string()],
            rows: vec![
                vec![Value::Text("2024-01-02".to_string()), Value::Real(185.64)],
                vec![Value::Text("2024-01-03".to_string()), Value::Real(184.0)],
            ],
        }
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Integer(58_414_460).to_string(), "58414460");
        assert_eq!(Value::Real(185.64).to_string(), "185.64");
        assert_eq!(Value::Real(153.0).to_string(), "153.0");
        assert_eq!(Value::Blob(vec![1, 2, 3]).to_string(), "<3 bytes>");
    }

    #[test]
    fn test_render_contains_headers_and_values() {
        let rendered = sample_table().render();
        assert!(rendered.contains("Highest Close"));
        assert!(rendered.contains("2024-01-02"));
        assert!(rendered.contains("184.0"));
    }

    #[test]
    fn test_to_csv() {
        assert_eq!(
            sample_table().to_csv(),
            "Date,Highest Close\n2024-01-02,185.64\n2024-01-03,184.0\n"
        );
    }

    #[test]
    fn test_to_csv_quotes_and_nulls() {
        let table = QueryTable {
            columns: vec!["note".to_string(), "volume".to_string()],
            rows: vec![vec![
                Value::Text("split, \"2:1\"".to_string()),
                Value::Null,
            ]],
        };
        assert_eq!(table.to_csv(), "note,volume\n\"split, \"\"2:1\"\"\",\n");
    }

    #[test]
    fn test_empty_table_csv_has_header_only() {
        let table = QueryTable {
            columns: vec!["Close".to_string()],
            rows: vec![],
        };
        assert!(table.is_empty());
        assert_eq!(table.to_csv(), "Close\n");
    }
}
