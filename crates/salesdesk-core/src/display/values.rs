//! Display implementation for result values.

use std::fmt;

use crate::models::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v}"),
            Value::Money(v) => write!(f, "{:.2}", v.round_dp(2)),
            Value::Date(v) => write!(f, "{}", v.strftime("%Y-%m-%d")),
            Value::Flag(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jiff::civil::date;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_money_has_two_places() {
        // Midpoints round to even, as fixed-point formatting usually does.
        let cases = [
            ("1200.5", "1200.50"),
            ("3", "3.00"),
            ("0.125", "0.12"),
            ("0.135", "0.14"),
            ("99.999", "100.00"),
        ];
        for (input, expected) in cases {
            let value = Value::Money(Decimal::from_str(input).expect("valid decimal"));
            assert_eq!(value.to_string(), expected, "input {input}");
        }
    }

    #[test]
    fn test_date_is_iso() {
        assert_eq!(Value::Date(date(2026, 2, 5)).to_string(), "2026-02-05");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(Value::Null.to_string(), "None");
        assert_eq!(Value::Flag(true).to_string(), "true");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::from("note").to_string(), "note");
    }
}
