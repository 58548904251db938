//! Salesman statements.

use rusqlite::params;

use super::Store;
use crate::{
    error::Result,
    models::{Column, Row, Salesman},
    params::{NewSalesman, SalesmanChanges, UpdateOutcome},
};

const SALESMAN_COLUMNS: [Column; 4] = [Column::Id, Column::Text, Column::Text, Column::Flag];

impl Store {
    /// Lists every salesman ordered by identifier.
    pub fn list_salesmen(&self) -> Result<Vec<Row>> {
        self.fetch_all(
            "SELECT id, full_name, phone, is_active FROM salesmen ORDER BY id;",
            [],
            &SALESMAN_COLUMNS,
        )
    }

    /// Loads a salesman by identifier.
    pub fn get_salesman(&self, id: i64) -> Result<Option<Salesman>> {
        self.fetch_one_as(
            "SELECT id, full_name, phone, is_active FROM salesmen WHERE id = ?1;",
            params![id],
            |row| {
                Ok(Salesman {
                    id: row.get(0)?,
                    full_name: row.get(1)?,
                    phone: row.get(2)?,
                    is_active: row.get(3)?,
                })
            },
        )
    }

    /// Inserts a salesman and returns the generated identifier.
    pub fn add_salesman(&self, new: &NewSalesman) -> Result<i64> {
        self.execute_insert(
            "INSERT INTO salesmen (full_name, phone, is_active) VALUES (?1, ?2, ?3);",
            params![new.full_name, new.phone, new.is_active],
        )
    }

    /// Applies `changes` to the salesman with the given identifier, keeping
    /// the current value of every field the changes leave unset.
    pub fn update_salesman(&self, id: i64, changes: SalesmanChanges) -> Result<UpdateOutcome> {
        let Some(current) = self.get_salesman(id)? else {
            return Ok(UpdateOutcome::NotFound);
        };
        let affected = self.rewrite_salesman(&changes.apply(current))?;
        Ok(UpdateOutcome::Updated(affected))
    }

    /// Writes every column of `salesman` back to its row.
    fn rewrite_salesman(&self, salesman: &Salesman) -> Result<usize> {
        self.execute_mutation(
            "UPDATE salesmen SET full_name = ?1, phone = ?2, is_active = ?3 WHERE id = ?4;",
            params![
                salesman.full_name,
                salesman.phone,
                salesman.is_active,
                salesman.id
            ],
        )
    }

    /// Deletes a salesman; an unknown identifier affects zero rows.
    pub fn delete_salesman(&self, id: i64) -> Result<usize> {
        self.execute_mutation("DELETE FROM salesmen WHERE id = ?1;", params![id])
    }
}
