//! Parameterized statement execution.
//!
//! Each entry point acquires its own connection, runs exactly one statement
//! and releases the connection on every exit path. Data-modifying statements
//! run inside a transaction that is committed on success and explicitly
//! rolled back before the error is returned.

use log::{debug, info, warn};
use rusqlite::{OptionalExtension, Params, Transaction};

use super::{decode::decode_row, Store};
use crate::{
    error::{DatabaseResultExt, Result, SalesError},
    models::{Column, Row},
};

impl Store {
    /// Runs a query and returns every result row.
    pub fn fetch_all<P: Params>(&self, sql: &str, params: P, columns: &[Column]) -> Result<Vec<Row>> {
        let connection = self.connect()?;
        debug!("fetch_all: {}", compact(sql));

        let mut stmt = connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;
        let rows = stmt
            .query_map(params, |row| decode_row(row, columns))
            .db_context("Failed to run query")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read query results")?;

        debug!("fetch_all returned {} row(s)", rows.len());
        Ok(rows)
    }

    /// Runs a query and returns its first row, or `None` when it yields none.
    pub fn fetch_one<P: Params>(
        &self,
        sql: &str,
        params: P,
        columns: &[Column],
    ) -> Result<Option<Row>> {
        self.fetch_one_as(sql, params, |row| decode_row(row, columns))
    }

    /// Like [`Store::fetch_one`] but maps the row with a caller-supplied
    /// closure, for loading typed entities.
    pub(crate) fn fetch_one_as<P, T, F>(&self, sql: &str, params: P, map: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    {
        let connection = self.connect()?;
        debug!("fetch_one: {}", compact(sql));

        connection
            .query_row(sql, params, map)
            .optional()
            .db_context("Failed to run query")
    }

    /// Runs a data-modifying statement and returns the number of affected
    /// rows.
    pub fn execute_mutation<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        self.in_transaction(sql, |tx| tx.execute(sql, params))
    }

    /// Runs an `INSERT` and returns the identifier the store generated for
    /// the new row.
    pub fn execute_insert<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        self.in_transaction(sql, |tx| {
            tx.execute(sql, params)?;
            Ok(tx.last_insert_rowid())
        })
    }

    fn in_transaction<T, F>(&self, sql: &str, statement: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> rusqlite::Result<T>,
    {
        let mut connection = self.connect()?;
        debug!("execute: {}", compact(sql));

        let tx = connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        match statement(&tx) {
            Ok(value) => {
                tx.commit().db_context("Failed to commit transaction")?;
                info!("Committed: {}", compact(sql));
                Ok(value)
            }
            Err(e) => {
                warn!("Statement failed, rolling back: {e}");
                if let Err(rollback) = tx.rollback() {
                    warn!("Rollback failed: {rollback}");
                }
                Err(SalesError::database("Failed to execute statement").with_source(e))
            }
        }
    }
}

/// Collapses the whitespace of a SQL template for single-line logging.
fn compact(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}
