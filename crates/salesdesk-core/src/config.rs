//! Process-wide configuration, built once at startup.

use std::path::{Path, PathBuf};

use crate::error::{Result, SalesError};

const APP_PREFIX: &str = "salesdesk";
const DATABASE_FILE: &str = "salesdesk.db";
const EXPORT_FILE: &str = "exports/report.txt";

/// Static settings shared by the store, the exporter and the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file backing the store
    pub database_path: PathBuf,
    /// File that report output is written to on request
    pub export_path: PathBuf,
    /// Whether terminal headings may be styled
    pub color: bool,
}

/// Builder for creating [`Config`] values.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    database_path: Option<PathBuf>,
    export_path: Option<PathBuf>,
    color: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/salesdesk/salesdesk.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom export file path.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/salesdesk/exports/report.txt`.
    pub fn with_export_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.export_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Enables or disables styled terminal output. Enabled by default.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    /// Builds the configuration, resolving XDG defaults for unset paths.
    ///
    /// # Errors
    ///
    /// Returns `SalesError::XdgDirectory` if a default path cannot be placed
    /// and `SalesError::Configuration` if the export file would overwrite the
    /// database.
    pub fn build(self) -> Result<Config> {
        let database_path = match self.database_path {
            Some(path) => path,
            None => Self::default_data_file(DATABASE_FILE)?,
        };
        let export_path = match self.export_path {
            Some(path) => path,
            None => Self::default_data_file(EXPORT_FILE)?,
        };

        if export_path == database_path {
            return Err(SalesError::Configuration {
                message: format!(
                    "export file {} is also the database file",
                    export_path.display()
                ),
            });
        }

        Ok(Config {
            database_path,
            export_path,
            color: self.color.unwrap_or(true),
        })
    }

    /// Returns a path under the XDG data directory, creating its parents.
    fn default_data_file(name: &str) -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX)
            .place_data_file(name)
            .map_err(|e| SalesError::XdgDirectory(e.to_string()))
    }
}
