//! Customer statements.

use rusqlite::params;

use super::Store;
use crate::{
    error::Result,
    models::{Column, Customer, Row},
    params::{CustomerChanges, NewCustomer, UpdateOutcome},
};

const CUSTOMER_COLUMNS: [Column; 5] = [
    Column::Id,
    Column::Text,
    Column::Text,
    Column::Text,
    Column::Flag,
];

impl Store {
    /// Lists every customer ordered by identifier.
    pub fn list_customers(&self) -> Result<Vec<Row>> {
        self.fetch_all(
            "SELECT id, full_name, phone, email, is_active FROM customers ORDER BY id;",
            [],
            &CUSTOMER_COLUMNS,
        )
    }

    /// Loads a customer by identifier.
    pub fn get_customer(&self, id: i64) -> Result<Option<Customer>> {
        self.fetch_one_as(
            "SELECT id, full_name, phone, email, is_active FROM customers WHERE id = ?1;",
            params![id],
            |row| {
                Ok(Customer {
                    id: row.get(0)?,
                    full_name: row.get(1)?,
                    phone: row.get(2)?,
                    email: row.get(3)?,
                    is_active: row.get(4)?,
                })
            },
        )
    }

    /// Inserts a customer and returns the generated identifier.
    pub fn add_customer(&self, new: &NewCustomer) -> Result<i64> {
        self.execute_insert(
            "INSERT INTO customers (full_name, phone, email, is_active) VALUES (?1, ?2, ?3, ?4);",
            params![new.full_name, new.phone, new.email, new.is_active],
        )
    }

    /// Applies `changes` to the customer with the given identifier, keeping
    /// the current value of every field the changes leave unset.
    pub fn update_customer(&self, id: i64, changes: CustomerChanges) -> Result<UpdateOutcome> {
        let Some(current) = self.get_customer(id)? else {
            return Ok(UpdateOutcome::NotFound);
        };
        let affected = self.rewrite_customer(&changes.apply(current))?;
        Ok(UpdateOutcome::Updated(affected))
    }

    /// Writes every column of `customer` back to its row.
    fn rewrite_customer(&self, customer: &Customer) -> Result<usize> {
        self.execute_mutation(
            "UPDATE customers SET full_name = ?1, phone = ?2, email = ?3, is_active = ?4 WHERE id = ?5;",
            params![
                customer.full_name,
                customer.phone,
                customer.email,
                customer.is_active,
                customer.id
            ],
        )
    }

    /// Deletes a customer; an unknown identifier affects zero rows.
    pub fn delete_customer(&self, id: i64) -> Result<usize> {
        self.execute_mutation("DELETE FROM customers WHERE id = ?1;", params![id])
    }
}
