#![allow(dead_code)]

use std::str::FromStr;

use rust_decimal::Decimal;
use salesdesk_core::{
    Exporter, NewCustomer, NewSale, NewSalesman, ScriptedConsole, Session, Store,
};
use tempfile::TempDir;

/// Helper function to create a store in a temporary directory
pub fn create_test_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Store::open(temp_dir.path().join("test.db")).expect("Failed to open store");
    (temp_dir, store)
}

/// Helper function to create a scripted session over a fresh store
pub fn create_test_session<I, S>(lines: I) -> (TempDir, Session<ScriptedConsole>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (temp_dir, store) = create_test_store();
    let exporter = Exporter::new(temp_dir.path().join("exports/report.txt"));
    let session = Session::new(store, exporter, ScriptedConsole::new(lines));
    (temp_dir, session)
}

pub fn amount(text: &str) -> Decimal {
    Decimal::from_str(text).expect("valid decimal")
}

pub fn add_salesman(store: &Store, name: &str) -> i64 {
    store
        .add_salesman(&NewSalesman {
            full_name: name.to_string(),
            phone: None,
            is_active: true,
        })
        .expect("Failed to add salesman")
}

pub fn add_customer(store: &Store, name: &str) -> i64 {
    store
        .add_customer(&NewCustomer {
            full_name: name.to_string(),
            phone: None,
            email: None,
            is_active: true,
        })
        .expect("Failed to add customer")
}

pub fn add_sale(store: &Store, salesman_id: i64, customer_id: i64, value: &str, date: &str) -> i64 {
    store
        .add_sale(&NewSale {
            salesman_id,
            customer_id,
            amount: amount(value),
            sale_date: date.to_string(),
            note: None,
        })
        .expect("Failed to add sale")
}

/// Two salesmen with sales, one without; two customers with purchases, one
/// without.
pub struct Fixture {
    pub ivanov: i64,
    pub petrenko: i64,
    pub idle_salesman: i64,
    pub acme: i64,
    pub globex: i64,
    pub idle_customer: i64,
}

pub fn seed(store: &Store) -> Fixture {
    let ivanov = add_salesman(store, "Ivanov");
    let petrenko = add_salesman(store, "Petrenko");
    let idle_salesman = add_salesman(store, "Idle");
    let acme = add_customer(store, "Acme");
    let globex = add_customer(store, "Globex");
    let idle_customer = add_customer(store, "Nobody");

    add_sale(store, ivanov, acme, "1200.50", "2026-02-15");
    add_sale(store, ivanov, globex, "300", "2026-02-16");
    add_sale(store, petrenko, acme, "99.99", "2026-03-01");
    add_sale(store, petrenko, globex, "5000.00", "2026-03-02");
    add_sale(store, petrenko, globex, "0.01", "2026-03-03");

    Fixture {
        ivanov,
        petrenko,
        idle_salesman,
        acme,
        globex,
        idle_customer,
    }
}
