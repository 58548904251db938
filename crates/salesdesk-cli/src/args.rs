use std::path::PathBuf;

use clap::Parser;

/// Interactive sales reporting and record keeping
///
/// Salesdesk keeps salesmen, customers and sales in a local SQLite database.
/// It runs as a numbered-menu session on the terminal: pick canned reports
/// from the reports menu or maintain records from the data editing menu.
/// Any report or listing can be saved to the export file.
#[derive(Parser)]
#[command(version, about, name = "salesdesk")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/salesdesk/salesdesk.db
    #[arg(long)]
    pub database_file: Option<PathBuf>,

    /// File that saved results are written to. Defaults to
    /// $XDG_DATA_HOME/salesdesk/exports/report.txt
    #[arg(long)]
    pub export_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
