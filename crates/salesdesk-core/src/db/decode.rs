//! Decoding of raw SQLite values into [`Value`]s.

use jiff::civil::Date;
use rusqlite::types::{FromSqlError, Type, ValueRef};
use rust_decimal::{prelude::FromPrimitive, Decimal};

use crate::models::{amount_from_cents, Column, Row, Value};

/// Decodes every column of `row` according to `columns`.
///
/// `columns` must not be longer than the select list.
pub(super) fn decode_row(row: &rusqlite::Row<'_>, columns: &[Column]) -> rusqlite::Result<Row> {
    columns
        .iter()
        .enumerate()
        .map(|(idx, column)| decode_value(row.get_ref(idx)?, *column, idx))
        .collect()
}

fn decode_value(raw: ValueRef<'_>, column: Column, idx: usize) -> rusqlite::Result<Value> {
    if let ValueRef::Null = raw {
        return Ok(Value::Null);
    }

    let conversion = |e: FromSqlError| {
        rusqlite::Error::FromSqlConversionFailure(idx, raw.data_type(), Box::new(e))
    };

    match column {
        Column::Id => raw.as_i64().map(Value::Int).map_err(conversion),
        Column::Flag => raw.as_i64().map(|v| Value::Flag(v != 0)).map_err(conversion),
        Column::Text => Ok(Value::Text(text_of(raw, idx)?)),
        Column::Money => decode_money(raw, idx),
        Column::Date => {
            let text = text_of(raw, idx)?;
            // Shape-valid but calendar-invalid dates are kept verbatim.
            Ok(text
                .parse::<Date>()
                .map(Value::Date)
                .unwrap_or(Value::Text(text)))
        }
    }
}

fn decode_money(raw: ValueRef<'_>, idx: usize) -> rusqlite::Result<Value> {
    let amount = match raw {
        ValueRef::Integer(cents) => Some(amount_from_cents(cents)),
        // Averages come back as fractional cents.
        ValueRef::Real(cents) => {
            Decimal::from_f64(cents).map(|d| (d / Decimal::ONE_HUNDRED).round_dp(2))
        }
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.parse::<Decimal>().ok())
            .map(|d| (d / Decimal::ONE_HUNDRED).round_dp(2)),
        _ => None,
    };

    amount.map(Value::Money).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            raw.data_type(),
            format!("column {idx} is not an amount").into(),
        )
    })
}

fn text_of(raw: ValueRef<'_>, idx: usize) -> rusqlite::Result<String> {
    match raw {
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map(String::from)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))),
        ValueRef::Integer(v) => Ok(v.to_string()),
        ValueRef::Real(v) => Ok(v.to_string()),
        ValueRef::Blob(_) | ValueRef::Null => Err(rusqlite::Error::InvalidColumnType(
            idx,
            format!("column {idx}"),
            raw.data_type(),
        )),
    }
}
