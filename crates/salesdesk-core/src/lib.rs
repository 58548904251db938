//! Core library for the Salesdesk reporting tool.
//!
//! This crate holds everything behind the interactive menus: the SQLite-backed
//! store for salesmen, customers and sales, the canned reports, the text
//! formatter and exporter, the input collectors and the menu state machine.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    ┌────────────┐    ┌──────────┐    ┌──────────────┐
//! │   Menu   │───▶│  Handlers  │───▶│  Store   │───▶│  Connection  │
//! │ (menu)   │    │ (handlers) │    │  (db)    │    │  (per call)  │
//! └──────────┘    └────────────┘    └──────────┘    └──────────────┘
//!                       │
//!                       ▼
//!              display → export → console
//! ```
//!
//! All operator interaction goes through the [`Console`] trait, so the whole
//! flow can be driven by a [`ScriptedConsole`] in tests.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use salesdesk_core::{menu, ConfigBuilder, ScriptedConsole, Session};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigBuilder::new()
//!     .with_database_path(Some("sales.db"))
//!     .with_export_path(Some("exports/report.txt"))
//!     .build()?;
//!
//! // Add a salesman, list salesmen without saving, then leave.
//! let console = ScriptedConsole::new(["2", "2", "Ivanov", "", "", "1", "n", "0", "0"]);
//! let mut session = Session::from_config(&config, console)?;
//! menu::run(&mut session)?;
//!
//! println!("{}", session.into_console().output());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod console;
pub mod db;
pub mod display;
pub mod error;
pub mod export;
pub mod handlers;
pub mod input;
pub mod menu;
pub mod models;
pub mod params;
pub mod reports;
pub mod session;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder};
pub use console::{Console, ScriptedConsole};
pub use db::Store;
pub use display::{rows_to_text, ReportText};
pub use error::{Result, SalesError};
pub use export::{print_and_maybe_save, Exporter};
pub use models::{Column, Customer, Row, Sale, Salesman, Value};
pub use params::{
    CustomerChanges, NewCustomer, NewSale, NewSalesman, SaleChanges, SalesmanChanges,
    UpdateOutcome,
};
pub use reports::{Report, Subject};
pub use session::Session;
