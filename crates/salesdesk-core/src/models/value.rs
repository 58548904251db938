//! Generic result values for reports and listings.

use jiff::civil::Date;
use rust_decimal::Decimal;

/// How a result column is decoded from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Integer identifier or count
    Id,
    /// Free text (names, phones, notes)
    Text,
    /// Amount stored in cents, decoded to a two-place decimal
    Money,
    /// Sale date stored as `YYYY-MM-DD` text
    Date,
    /// Boolean stored as 0/1
    Flag,
}

/// A single scalar from a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Int(i64),
    Text(String),
    Money(Decimal),
    Date(Date),
    Flag(bool),
}

/// One result row, columns in select order.
pub type Row = Vec<Value>;

impl Value {
    /// Returns the integer payload, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the amount payload, if any.
    pub fn as_money(&self) -> Option<Decimal> {
        match self {
            Value::Money(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Money(v)
    }
}

impl From<Date> for Value {
    fn from(v: Date) -> Self {
        Value::Date(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Flag(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
