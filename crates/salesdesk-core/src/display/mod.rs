//! Text rendering of result rows.
//!
//! [`Value`](crate::models::Value) implements [`std::fmt::Display`] in
//! [`values`]; [`ReportText`] arranges a set of rows under an optional header.
//! The produced text is what the operator sees and, on request, exactly what
//! is written to the export file.
//!
//! ```rust
//! use salesdesk_core::{display::rows_to_text, models::Value};
//!
//! let rows = vec![vec![Value::Int(1), Value::from("Ivanov"), Value::Null]];
//! let text = rows_to_text(&rows, Some("Salesmen"));
//! assert_eq!(text, "Salesmen\n--------\n(1, Ivanov, None)");
//! ```

use std::fmt;

use crate::models::Row;

pub mod values;

/// Line printed in place of rows when a query returned nothing.
pub const NO_DATA: &str = "No data.";

/// Newtype wrapper rendering rows as parenthesized, comma-joined lines.
pub struct ReportText<'a> {
    pub header: Option<&'a str>,
    pub rows: &'a [Row],
}

impl<'a> ReportText<'a> {
    pub fn new(rows: &'a [Row], header: Option<&'a str>) -> Self {
        Self { header, rows }
    }
}

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = Vec::with_capacity(self.rows.len() + 2);

        if let Some(header) = self.header.filter(|h| !h.is_empty()) {
            lines.push(header.to_string());
            lines.push("-".repeat(header.chars().count()));
        }

        if self.rows.is_empty() {
            lines.push(NO_DATA.to_string());
        }

        for row in self.rows {
            let columns: Vec<String> = row.iter().map(ToString::to_string).collect();
            lines.push(format!("({})", columns.join(", ")));
        }

        write!(f, "{}", lines.join("\n"))
    }
}

/// Renders rows under an optional header.
pub fn rows_to_text(rows: &[Row], header: Option<&str>) -> String {
    ReportText::new(rows, header).to_string()
}
