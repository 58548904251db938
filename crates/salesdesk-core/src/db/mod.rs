//! Data access for salesmen, customers and sales.
//!
//! A [`Store`] holds nothing but the location of the SQLite database. Every
//! data-access call opens its own connection through [`Store::connect`], runs
//! one statement and drops the connection before returning, on success and on
//! failure alike. There is no pooling and no state shared between calls.
//!
//! - [`executor`]: the generic `fetch_all` / `fetch_one` / `execute_mutation`
//!   entry points
//! - [`schema`]: schema bootstrap for a fresh database file
//! - [`salesman_queries`], [`customer_queries`], [`sale_queries`]: CRUD
//!   statements per entity
//! - [`report_queries`]: the canned analytical reports

use std::path::{Path, PathBuf};

use log::debug;
use rusqlite::{Connection, OpenFlags};

use crate::error::{DatabaseResultExt, Result, SalesError};

mod decode;
pub mod customer_queries;
pub mod executor;
pub mod report_queries;
pub mod sale_queries;
pub mod salesman_queries;
pub mod schema;

/// Connection provider and query entry point for the relational store.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens the store at `path`, creating the file, its parent directories
    /// and the schema if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `SalesError::FileSystem` if the parent directory cannot be
    /// created and `SalesError::Connection` or `SalesError::Database` if the
    /// database cannot be opened or initialised.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SalesError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let connection = Connection::open(&path).map_err(|e| SalesError::Connection {
            path: path.clone(),
            source: e,
        })?;
        schema::initialize(&connection)?;

        Ok(Self { path })
    }

    /// Path of the database file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection for a single data-access call.
    ///
    /// The file must already exist; a missing or unreadable database is
    /// reported as a connection failure instead of silently creating an
    /// empty one.
    pub(crate) fn connect(&self) -> Result<Connection> {
        debug!("Opening connection to {}", self.path.display());

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let connection =
            Connection::open_with_flags(&self.path, flags).map_err(|e| SalesError::Connection {
                path: self.path.clone(),
                source: e,
            })?;

        connection
            .execute_batch("PRAGMA foreign_keys = ON")
            .db_context("Failed to enable foreign keys")?;

        Ok(connection)
    }
}
