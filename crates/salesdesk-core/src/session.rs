//! Everything a handler needs for one interactive run.

use crate::{config::Config, console::Console, db::Store, error::Result, export::Exporter};

/// Store, exporter and console bundled for the menu and handlers.
pub struct Session<C: Console> {
    pub store: Store,
    pub exporter: Exporter,
    pub console: C,
}

impl<C: Console> Session<C> {
    pub fn new(store: Store, exporter: Exporter, console: C) -> Self {
        Self {
            store,
            exporter,
            console,
        }
    }

    /// Opens the store named by `config` and wires up the exporter.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the database cannot be opened.
    pub fn from_config(config: &Config, console: C) -> Result<Self> {
        let store = Store::open(&config.database_path)?;
        let exporter = Exporter::new(&config.export_path);
        Ok(Self::new(store, exporter, console))
    }

    /// Releases the console, e.g. to inspect captured output.
    pub fn into_console(self) -> C {
        self.console
    }
}
