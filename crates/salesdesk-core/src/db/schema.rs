//! Database schema initialization.

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

/// Creates the tables and indexes if they do not exist yet.
pub(crate) fn initialize(connection: &Connection) -> Result<()> {
    connection
        .execute_batch("PRAGMA foreign_keys = ON")
        .db_context("Failed to enable foreign keys")?;

    let schema_sql = include_str!("../../assets/schema.sql");
    connection
        .execute_batch(schema_sql)
        .db_context("Failed to initialize database schema")?;

    Ok(())
}
