//! List/add/update/delete handlers for the three entities.
//!
//! Update handlers check that the record exists and abort with a "not found"
//! message before prompting for anything when it does not. Every field prompt
//! then defaults to the stored value when left blank, and the store merges
//! the changes over the current row.

use log::{info, warn};

use crate::{
    console::Console,
    display::rows_to_text,
    error::Result,
    export::print_and_maybe_save,
    input::{
        parse_flag, read_amount, read_date, read_id, read_optional_amount, read_optional_date,
        read_optional_flag, read_optional_id, read_optional_text, read_text,
    },
    params::{
        CustomerChanges, NewCustomer, NewSale, NewSalesman, SaleChanges, SalesmanChanges,
        UpdateOutcome,
    },
    session::Session,
};

/// Entity a CRUD action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Salesman,
    Customer,
    Sale,
}

/// CRUD operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    Update,
    Delete,
}

/// Runs one CRUD action.
pub fn handle_crud<C: Console>(
    session: &mut Session<C>,
    entity: Entity,
    operation: Operation,
) -> Result<()> {
    use Entity::*;
    use Operation::*;

    match (entity, operation) {
        (Salesman, List) => list_salesmen(session).map(drop),
        (Salesman, Add) => add_salesman(session).map(drop),
        (Salesman, Update) => update_salesman(session).map(drop),
        (Salesman, Delete) => delete_salesman(session).map(drop),
        (Customer, List) => list_customers(session).map(drop),
        (Customer, Add) => add_customer(session).map(drop),
        (Customer, Update) => update_customer(session).map(drop),
        (Customer, Delete) => delete_customer(session).map(drop),
        (Sale, List) => list_sales(session).map(drop),
        (Sale, Add) => add_sale(session).map(drop),
        (Sale, Update) => update_sale(session).map(drop),
        (Sale, Delete) => delete_sale(session).map(drop),
    }
}

/// Reads an "active" answer for a new record: blank or affirmative is true.
fn read_new_flag<C: Console>(console: &mut C) -> Result<bool> {
    let answer = read_text(console, "Active? (y/n, Enter=y): ")?;
    Ok(answer.is_empty() || parse_flag(&answer))
}

fn report_update<C: Console>(
    session: &mut Session<C>,
    outcome: UpdateOutcome,
    not_found: &str,
) -> Result<UpdateOutcome> {
    match outcome {
        UpdateOutcome::NotFound => session.console.print(not_found)?,
        UpdateOutcome::Updated(affected) => session
            .console
            .print(&format!("Rows updated: {affected}"))?,
    }
    Ok(outcome)
}

fn report_delete<C: Console>(session: &mut Session<C>, affected: usize) -> Result<usize> {
    session
        .console
        .print(&format!("Rows deleted: {affected}"))?;
    Ok(affected)
}

// Salesmen

pub fn list_salesmen<C: Console>(session: &mut Session<C>) -> Result<String> {
    let rows = session.store.list_salesmen()?;
    let text = rows_to_text(&rows, Some("Salesmen"));
    print_and_maybe_save(&mut session.console, &session.exporter, text)
}

/// Returns the new identifier, or `None` if the input was rejected.
pub fn add_salesman<C: Console>(session: &mut Session<C>) -> Result<Option<i64>> {
    let console = &mut session.console;
    let params = NewSalesman {
        full_name: read_text(console, "Salesman full name: ")?,
        phone: read_optional_text(console, "Phone: ")?,
        is_active: read_new_flag(console)?,
    };

    if let Err(e) = params.validate() {
        warn!("Rejected new salesman: {e}");
        console.print("Full name must not be empty.")?;
        return Ok(None);
    }

    let id = session.store.add_salesman(&params)?;
    info!("Added salesman {id}");
    session.console.print(&format!("Salesman added. ID={id}"))?;
    Ok(Some(id))
}

pub fn update_salesman<C: Console>(session: &mut Session<C>) -> Result<UpdateOutcome> {
    let id = read_id(&mut session.console, "Salesman ID to update: ")?;
    if session.store.get_salesman(id)?.is_none() {
        session.console.print("No salesman with this ID.")?;
        return Ok(UpdateOutcome::NotFound);
    }

    let console = &mut session.console;
    let changes = SalesmanChanges {
        full_name: read_optional_text(console, "New full name (Enter = keep): ")?,
        phone: read_optional_text(console, "New phone (Enter = keep): ")?,
        is_active: read_optional_flag(console, "Active? (y/n, Enter = keep): ")?,
    };

    let outcome = session.store.update_salesman(id, changes)?;
    report_update(session, outcome, "No salesman with this ID.")
}

pub fn delete_salesman<C: Console>(session: &mut Session<C>) -> Result<usize> {
    let id = read_id(&mut session.console, "Salesman ID to delete: ")?;
    let affected = session.store.delete_salesman(id)?;
    report_delete(session, affected)
}

// Customers

pub fn list_customers<C: Console>(session: &mut Session<C>) -> Result<String> {
    let rows = session.store.list_customers()?;
    let text = rows_to_text(&rows, Some("Customers"));
    print_and_maybe_save(&mut session.console, &session.exporter, text)
}

/// Returns the new identifier, or `None` if the input was rejected.
pub fn add_customer<C: Console>(session: &mut Session<C>) -> Result<Option<i64>> {
    let console = &mut session.console;
    let params = NewCustomer {
        full_name: read_text(console, "Customer full name: ")?,
        phone: read_optional_text(console, "Phone: ")?,
        email: read_optional_text(console, "Email: ")?,
        is_active: read_new_flag(console)?,
    };

    if let Err(e) = params.validate() {
        warn!("Rejected new customer: {e}");
        console.print("Full name must not be empty.")?;
        return Ok(None);
    }

    let id = session.store.add_customer(&params)?;
    info!("Added customer {id}");
    session.console.print(&format!("Customer added. ID={id}"))?;
    Ok(Some(id))
}

pub fn update_customer<C: Console>(session: &mut Session<C>) -> Result<UpdateOutcome> {
    let id = read_id(&mut session.console, "Customer ID to update: ")?;
    if session.store.get_customer(id)?.is_none() {
        session.console.print("No customer with this ID.")?;
        return Ok(UpdateOutcome::NotFound);
    }

    let console = &mut session.console;
    let changes = CustomerChanges {
        full_name: read_optional_text(console, "New full name (Enter = keep): ")?,
        phone: read_optional_text(console, "New phone (Enter = keep): ")?,
        email: read_optional_text(console, "New email (Enter = keep): ")?,
        is_active: read_optional_flag(console, "Active? (y/n, Enter = keep): ")?,
    };

    let outcome = session.store.update_customer(id, changes)?;
    report_update(session, outcome, "No customer with this ID.")
}

pub fn delete_customer<C: Console>(session: &mut Session<C>) -> Result<usize> {
    let id = read_id(&mut session.console, "Customer ID to delete: ")?;
    let affected = session.store.delete_customer(id)?;
    report_delete(session, affected)
}

// Sales

pub fn list_sales<C: Console>(session: &mut Session<C>) -> Result<String> {
    let rows = session.store.list_sales()?;
    let text = rows_to_text(&rows, Some("Sales"));
    print_and_maybe_save(&mut session.console, &session.exporter, text)
}

/// Returns the new identifier, or `None` if the input was rejected.
pub fn add_sale<C: Console>(session: &mut Session<C>) -> Result<Option<i64>> {
    let console = &mut session.console;
    console.print("Hint: look up salesman and customer IDs with the list actions first.")?;
    let params = NewSale {
        salesman_id: read_id(console, "Salesman ID: ")?,
        customer_id: read_id(console, "Customer ID: ")?,
        amount: read_amount(console, "Amount: ")?,
        sale_date: read_date(console, "Sale date")?,
        note: read_optional_text(console, "Note: ")?,
    };

    if let Err(e) = params.validate() {
        warn!("Rejected new sale: {e}");
        console.print(&e.to_string())?;
        return Ok(None);
    }

    let id = session.store.add_sale(&params)?;
    info!("Added sale {id}");
    session.console.print(&format!("Sale added. ID={id}"))?;
    Ok(Some(id))
}

pub fn update_sale<C: Console>(session: &mut Session<C>) -> Result<UpdateOutcome> {
    let id = read_id(&mut session.console, "Sale ID to update: ")?;
    if session.store.get_sale(id)?.is_none() {
        session.console.print("No sale with this ID.")?;
        return Ok(UpdateOutcome::NotFound);
    }

    let console = &mut session.console;
    let changes = SaleChanges {
        salesman_id: read_optional_id(console, "Salesman ID (Enter = keep): ")?,
        customer_id: read_optional_id(console, "Customer ID (Enter = keep): ")?,
        amount: read_optional_amount(console, "Amount (Enter = keep): ")?,
        sale_date: read_optional_date(console, "Date (YYYY-MM-DD, Enter = keep): ")?,
        note: read_optional_text(console, "Note (Enter = keep): ")?,
    };

    let outcome = session.store.update_sale(id, changes)?;
    report_update(session, outcome, "No sale with this ID.")
}

pub fn delete_sale<C: Console>(session: &mut Session<C>) -> Result<usize> {
    let id = read_id(&mut session.console, "Sale ID to delete: ")?;
    let affected = session.store.delete_sale(id)?;
    report_delete(session, affected)
}
