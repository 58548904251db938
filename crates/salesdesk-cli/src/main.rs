//! Salesdesk CLI Application
//!
//! Interactive terminal front end for the salesdesk reporting tool.

mod args;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use renderer::TerminalConsole;
use salesdesk_core::{menu, ConfigBuilder, Session};

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        export_file,
        no_color,
    } = Args::parse();

    let config = ConfigBuilder::new()
        .with_database_path(database_file)
        .with_export_path(export_file)
        .with_color(!no_color)
        .build()
        .context("Failed to resolve configuration")?;

    let console = TerminalConsole::stdio(config.color);
    let mut session = Session::from_config(&config, console).with_context(|| {
        format!(
            "Failed to open database at {}",
            config.database_path.display()
        )
    })?;

    info!("Salesdesk started with {}", config.database_path.display());

    match menu::run(&mut session) {
        Ok(()) => Ok(()),
        Err(e) if e.is_end_of_input() => {
            info!("Input closed, exiting");
            Ok(())
        }
        Err(e) => Err(e).context("Terminal session failed"),
    }
}
