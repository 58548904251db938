//! Writing report text to the configured export file.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::{
    console::Console,
    error::{Result, SalesError},
    input::{parse_flag, read_text},
};

/// Saves report text to a single, fixed file.
#[derive(Debug, Clone)]
pub struct Exporter {
    path: PathBuf,
}

impl Exporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the export file with `text`, creating missing parent
    /// directories first.
    pub fn save(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SalesError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(&self.path, text).map_err(|e| SalesError::FileSystem {
            path: self.path.clone(),
            source: e,
        })?;

        info!("Saved {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }
}

/// Prints `text`, then offers to save it to the export file.
///
/// Returns the text whether or not it was saved.
pub fn print_and_maybe_save<C: Console>(
    console: &mut C,
    exporter: &Exporter,
    text: String,
) -> Result<String> {
    console.print(&format!("\n{text}"))?;

    let answer = read_text(console, "Save result to file? (y/n): ")?;
    if parse_flag(&answer) {
        exporter.save(&text)?;
        console.print(&format!("Result saved to {}.", exporter.path().display()))?;
    }

    Ok(text)
}
