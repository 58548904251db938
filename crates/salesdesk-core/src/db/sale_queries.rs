//! Sale statements.

use rusqlite::params;

use super::Store;
use crate::{
    error::Result,
    models::{amount_from_cents, amount_to_cents, Column, Row, Sale},
    params::{NewSale, SaleChanges, UpdateOutcome},
};

const SALE_COLUMNS: [Column; 6] = [
    Column::Id,
    Column::Date,
    Column::Money,
    Column::Id,
    Column::Id,
    Column::Text,
];

impl Store {
    /// Lists every sale ordered by identifier.
    pub fn list_sales(&self) -> Result<Vec<Row>> {
        self.fetch_all(
            "SELECT s.id, s.sale_date, s.amount, s.salesman_id, s.customer_id, s.note
             FROM sales s
             ORDER BY s.id;",
            [],
            &SALE_COLUMNS,
        )
    }

    /// Loads a sale by identifier.
    pub fn get_sale(&self, id: i64) -> Result<Option<Sale>> {
        self.fetch_one_as(
            "SELECT id, sale_date, amount, salesman_id, customer_id, note FROM sales WHERE id = ?1;",
            params![id],
            |row| {
                Ok(Sale {
                    id: row.get(0)?,
                    sale_date: row.get(1)?,
                    amount: amount_from_cents(row.get(2)?),
                    salesman_id: row.get(3)?,
                    customer_id: row.get(4)?,
                    note: row.get(5)?,
                })
            },
        )
    }

    /// Inserts a sale and returns the generated identifier.
    pub fn add_sale(&self, new: &NewSale) -> Result<i64> {
        let cents = amount_to_cents(new.amount)?;
        self.execute_insert(
            "INSERT INTO sales (salesman_id, customer_id, amount, sale_date, note)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![new.salesman_id, new.customer_id, cents, new.sale_date, new.note],
        )
    }

    /// Applies `changes` to the sale with the given identifier, keeping the
    /// current value of every field the changes leave unset.
    pub fn update_sale(&self, id: i64, changes: SaleChanges) -> Result<UpdateOutcome> {
        let Some(current) = self.get_sale(id)? else {
            return Ok(UpdateOutcome::NotFound);
        };
        let affected = self.rewrite_sale(&changes.apply(current))?;
        Ok(UpdateOutcome::Updated(affected))
    }

    /// Writes every column of `sale` back to its row.
    fn rewrite_sale(&self, sale: &Sale) -> Result<usize> {
        let cents = amount_to_cents(sale.amount)?;
        self.execute_mutation(
            "UPDATE sales
             SET salesman_id = ?1, customer_id = ?2, amount = ?3, sale_date = ?4, note = ?5
             WHERE id = ?6;",
            params![
                sale.salesman_id,
                sale.customer_id,
                cents,
                sale.sale_date,
                sale.note,
                sale.id
            ],
        )
    }

    /// Deletes a sale; an unknown identifier affects zero rows.
    pub fn delete_sale(&self, id: i64) -> Result<usize> {
        self.execute_mutation("DELETE FROM sales WHERE id = ?1;", params![id])
    }
}
