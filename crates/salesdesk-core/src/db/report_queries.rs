//! Execution of the canned reports.

use rusqlite::params;

use super::Store;
use crate::{
    error::{Result, SalesError},
    models::Row,
    reports::Report,
};

impl Store {
    /// Runs a report, binding `subject_id` when the report is parameterized.
    ///
    /// Single-row reports yield zero or one row.
    pub fn run_report(&self, report: Report, subject_id: Option<i64>) -> Result<Vec<Row>> {
        let (sql, columns) = (report.sql(), report.columns());

        match (report.subject(), subject_id) {
            (Some(_), Some(id)) if report.single_row() => {
                Ok(self.fetch_one(sql, params![id], columns)?.into_iter().collect())
            }
            (Some(_), Some(id)) => self.fetch_all(sql, params![id], columns),
            (None, _) if report.single_row() => {
                Ok(self.fetch_one(sql, [], columns)?.into_iter().collect())
            }
            (None, _) => self.fetch_all(sql, [], columns),
            (Some(subject), None) => Err(SalesError::invalid_input(format!("{subject}_id"))
                .with_reason(format!("report '{report}' needs a {subject} identifier"))),
        }
    }
}
