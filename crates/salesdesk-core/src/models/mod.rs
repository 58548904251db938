//! Data models for salesmen, customers and sales.
//!
//! The entity structs ([`Salesman`], [`Customer`], [`Sale`]) mirror the rows of
//! the three tables and are used where a handler needs typed access to the
//! current state of a record, e.g. when merging an update with the stored
//! values.
//!
//! Reports and listings do not go through the entity structs. They return
//! generic [`Row`]s of [`Value`]s, decoded according to a [`Column`] layout
//! supplied by the query, so that any join or aggregate can be rendered by the
//! same formatter in [`crate::display`].

pub mod customer;
pub mod money;
pub mod sale;
pub mod salesman;
pub mod value;

pub use customer::Customer;
pub use money::{amount_from_cents, amount_to_cents};
pub use sale::Sale;
pub use salesman::Salesman;
pub use value::{Column, Row, Value};
