//! Menu-selectable operations.
//!
//! Each handler collects its input through the session console, runs one
//! store operation and reports the outcome to the operator. Store and export
//! failures are returned as errors for the menu loop to display; validation
//! problems are handled in place.
//!
//! - [`reports`]: the canned analytical reports
//! - [`crud`]: list/add/update/delete for salesmen, customers and sales

pub mod crud;
pub mod reports;

pub use crud::{handle_crud, Entity, Operation};
pub use reports::handle_report;
