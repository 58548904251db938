//! Sale model definition.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single sales transaction between a salesman and a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sale {
    /// Identifier generated by the store
    pub id: i64,

    /// Date of the sale as entered, in `YYYY-MM-DD` shape
    pub sale_date: String,

    /// Non-negative amount with two decimal places
    pub amount: Decimal,

    /// Salesman who made the sale
    pub salesman_id: i64,

    /// Customer who bought
    pub customer_id: i64,

    /// Free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
