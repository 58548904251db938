//! Parameter structures for create and update operations.
//!
//! These structures carry operator input from the console layer to the store
//! without any framework-specific derives. Create parameters are validated
//! with `validate()` before they reach the store; change parameters hold an
//! `Option` per field, where `None` means "keep the current value".

use rust_decimal::Decimal;

use crate::{
    error::{Result, SalesError},
    models::{Customer, Sale, Salesman},
};

/// Outcome of an update by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No record with the requested identifier exists; nothing was written.
    NotFound,
    /// The record was rewritten; holds the affected row count.
    Updated(usize),
}

fn require_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SalesError::invalid_input("full_name").with_reason("must not be empty"));
    }
    Ok(())
}

/// Parameters for adding a salesman.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSalesman {
    pub full_name: String,
    pub phone: Option<String>,
    pub is_active: bool,
}

impl NewSalesman {
    pub fn validate(&self) -> Result<()> {
        require_name(&self.full_name)
    }
}

/// Field-wise changes to a salesman.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesmanChanges {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}

impl SalesmanChanges {
    /// Merges the changes over the current record.
    pub fn apply(self, current: Salesman) -> Salesman {
        Salesman {
            id: current.id,
            full_name: self.full_name.unwrap_or(current.full_name),
            phone: self.phone.or(current.phone),
            is_active: self.is_active.unwrap_or(current.is_active),
        }
    }
}

/// Parameters for adding a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
}

impl NewCustomer {
    pub fn validate(&self) -> Result<()> {
        require_name(&self.full_name)
    }
}

/// Field-wise changes to a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerChanges {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

impl CustomerChanges {
    /// Merges the changes over the current record.
    pub fn apply(self, current: Customer) -> Customer {
        Customer {
            id: current.id,
            full_name: self.full_name.unwrap_or(current.full_name),
            phone: self.phone.or(current.phone),
            email: self.email.or(current.email),
            is_active: self.is_active.unwrap_or(current.is_active),
        }
    }
}

/// Parameters for recording a sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    pub salesman_id: i64,
    pub customer_id: i64,
    pub amount: Decimal,
    pub sale_date: String,
    pub note: Option<String>,
}

impl NewSale {
    pub fn validate(&self) -> Result<()> {
        if self.amount < Decimal::ZERO {
            return Err(SalesError::invalid_input("amount").with_reason("must not be negative"));
        }
        Ok(())
    }
}

/// Field-wise changes to a sale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleChanges {
    pub salesman_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub amount: Option<Decimal>,
    pub sale_date: Option<String>,
    pub note: Option<String>,
}

impl SaleChanges {
    /// Merges the changes over the current record.
    pub fn apply(self, current: Sale) -> Sale {
        Sale {
            id: current.id,
            salesman_id: self.salesman_id.unwrap_or(current.salesman_id),
            customer_id: self.customer_id.unwrap_or(current.customer_id),
            amount: self.amount.unwrap_or(current.amount),
            sale_date: self.sale_date.unwrap_or(current.sale_date),
            note: self.note.or(current.note),
        }
    }
}
