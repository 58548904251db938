//! Prompt-and-validate input collectors.
//!
//! Validation failures never surface as errors: the collector explains the
//! problem and prompts again. Only console failures (including end of input)
//! are returned to the caller.
//!
//! The pure validators ([`parse_id`], [`parse_amount`], [`is_date_shaped`],
//! [`parse_flag`]) are exposed separately so the rules can be checked without
//! a console.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{console::Console, error::Result, models::amount_to_cents};

/// Tokens accepted as "yes", compared after trimming and lowercasing.
pub const AFFIRMATIVE: [&str; 5] = ["y", "yes", "1", "так", "т"];

/// Why an amount was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    Negative,
    NotANumber,
    /// Too large to be stored in cents.
    OutOfRange,
}

/// Accepts identifiers made of ASCII digits only.
pub fn parse_id(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Parses a non-negative amount, accepting either `,` or `.` as the decimal
/// separator and exponent forms such as `1.5e3`. The amount must fit the
/// stored range of cents.
pub fn parse_amount(input: &str) -> std::result::Result<Decimal, AmountError> {
    let normalized = input.trim().replace(',', ".");
    if normalized.starts_with('-') {
        return Err(AmountError::Negative);
    }
    let amount = Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| AmountError::NotANumber)?;
    if amount < Decimal::ZERO {
        return Err(AmountError::Negative);
    }
    if amount_to_cents(amount).is_err() {
        return Err(AmountError::OutOfRange);
    }
    Ok(amount)
}

/// Checks the `YYYY-MM-DD` shape: three dash-separated digit groups of
/// four, two and two digits. Calendar correctness is not checked.
pub fn is_date_shaped(input: &str) -> bool {
    let parts: Vec<&str> = input.trim().split('-').collect();
    parts.len() == 3
        && parts
            .iter()
            .zip([4, 2, 2])
            .all(|(p, len)| p.len() == len && p.bytes().all(|b| b.is_ascii_digit()))
}

/// Whether the input is one of the [`AFFIRMATIVE`] tokens.
pub fn parse_flag(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    AFFIRMATIVE.contains(&input.as_str())
}

/// Prompts until an all-digit identifier is entered.
pub fn read_id<C: Console>(console: &mut C, prompt: &str) -> Result<i64> {
    loop {
        if let Some(id) = parse_id(&console.read_line(prompt)?) {
            return Ok(id);
        }
        console.print("Enter a whole-number ID.")?;
    }
}

/// Prompts until a non-negative amount is entered.
pub fn read_amount<C: Console>(console: &mut C, prompt: &str) -> Result<Decimal> {
    loop {
        match parse_amount(&console.read_line(prompt)?) {
            Ok(amount) => return Ok(amount),
            Err(e) => report_amount_error(console, e)?,
        }
    }
}

/// Prompts until a `YYYY-MM-DD` shaped date is entered.
pub fn read_date<C: Console>(console: &mut C, prompt: &str) -> Result<String> {
    let prompt = format!("{prompt} (YYYY-MM-DD): ");
    loop {
        let input = console.read_line(&prompt)?;
        if is_date_shaped(&input) {
            return Ok(input.trim().to_string());
        }
        console.print(DATE_HINT)?;
    }
}

/// Reads one trimmed line.
pub fn read_text<C: Console>(console: &mut C, prompt: &str) -> Result<String> {
    Ok(console.read_line(prompt)?.trim().to_string())
}

/// Reads one trimmed line; blank input yields `None`.
pub fn read_optional_text<C: Console>(console: &mut C, prompt: &str) -> Result<Option<String>> {
    let text = read_text(console, prompt)?;
    Ok((!text.is_empty()).then_some(text))
}

/// Reads a yes/no answer; blank input yields `None`, anything that is not
/// affirmative yields `Some(false)`.
pub fn read_optional_flag<C: Console>(console: &mut C, prompt: &str) -> Result<Option<bool>> {
    let text = read_text(console, prompt)?;
    Ok((!text.is_empty()).then(|| parse_flag(&text)))
}

/// Reads an identifier; blank input yields `None`, other invalid input
/// prompts again.
pub fn read_optional_id<C: Console>(console: &mut C, prompt: &str) -> Result<Option<i64>> {
    loop {
        let text = read_text(console, prompt)?;
        if text.is_empty() {
            return Ok(None);
        }
        if let Some(id) = parse_id(&text) {
            return Ok(Some(id));
        }
        console.print("Enter a whole-number ID.")?;
    }
}

/// Reads an amount; blank input yields `None`, other invalid input prompts
/// again.
pub fn read_optional_amount<C: Console>(console: &mut C, prompt: &str) -> Result<Option<Decimal>> {
    loop {
        let text = read_text(console, prompt)?;
        if text.is_empty() {
            return Ok(None);
        }
        match parse_amount(&text) {
            Ok(amount) => return Ok(Some(amount)),
            Err(e) => report_amount_error(console, e)?,
        }
    }
}

/// Reads a date; blank input yields `None`, badly shaped input prompts again.
pub fn read_optional_date<C: Console>(console: &mut C, prompt: &str) -> Result<Option<String>> {
    loop {
        let text = read_text(console, prompt)?;
        if text.is_empty() {
            return Ok(None);
        }
        if is_date_shaped(&text) {
            return Ok(Some(text));
        }
        console.print(DATE_HINT)?;
    }
}

const DATE_HINT: &str = "Invalid format. Example: 2026-02-15";

fn report_amount_error<C: Console>(console: &mut C, error: AmountError) -> Result<()> {
    let message = match error {
        AmountError::Negative => "Amount cannot be negative.",
        AmountError::NotANumber => "Enter a number (e.g. 1200.50).",
        AmountError::OutOfRange => "Amount is too large.",
    };
    console.print(message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_parse_id_accepts_digits_only() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("12a"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("+1"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn test_parse_amount_separators() {
        let expected = Decimal::from_str("1200.50").expect("valid decimal");
        assert_eq!(parse_amount("1200,50"), Ok(expected));
        assert_eq!(parse_amount("1200.50"), Ok(expected));
    }

    #[test]
    fn test_parse_amount_rejections() {
        assert_eq!(parse_amount("-5"), Err(AmountError::Negative));
        assert_eq!(parse_amount("-0"), Err(AmountError::Negative));
        assert_eq!(parse_amount("abc"), Err(AmountError::NotANumber));
        assert_eq!(parse_amount("1,2,3"), Err(AmountError::NotANumber));
        assert_eq!(parse_amount(""), Err(AmountError::NotANumber));
    }

    #[test]
    fn test_parse_amount_exponent_form() {
        assert_eq!(parse_amount("1e3"), Ok(Decimal::from(1000)));
        assert_eq!(
            parse_amount("1,5E2"),
            Ok(Decimal::from_str("150").expect("valid decimal"))
        );
        assert_eq!(
            parse_amount("1e-2"),
            Ok(Decimal::from_str("0.01").expect("valid decimal"))
        );
        assert_eq!(parse_amount("-1e2"), Err(AmountError::Negative));
    }

    #[test]
    fn test_parse_amount_rejects_unstorable_values() {
        assert_eq!(
            parse_amount("79228162514264337593543950335"),
            Err(AmountError::OutOfRange)
        );
        assert_eq!(
            parse_amount("92233720368547758.08"),
            Err(AmountError::OutOfRange)
        );
        assert!(parse_amount("92233720368547758.07").is_ok());
    }

    #[test]
    fn test_date_shape() {
        assert!(is_date_shaped("2026-02-15"));
        assert!(is_date_shaped("2026-13-40"));
        assert!(!is_date_shaped("15-02-2026"));
        assert!(!is_date_shaped("26-2-15"));
        assert!(!is_date_shaped("2026/02/15"));
        assert!(!is_date_shaped("2026--15"));
        assert!(!is_date_shaped("2026-02-15-01"));
    }

    #[test]
    fn test_date_shape_group_widths() {
        assert!(!is_date_shaped("2026-2-15"));
        assert!(!is_date_shaped("2026-02-5"));
        assert!(!is_date_shaped("202-02-15"));
        assert!(!is_date_shaped("20260-02-15"));
    }

    #[test]
    fn test_parse_flag_tokens() {
        for token in ["y", "YES", " 1 ", "так", "ТАК", "т"] {
            assert!(parse_flag(token), "{token}");
        }
        for token in ["n", "no", "0", "", "yep"] {
            assert!(!parse_flag(token), "{token}");
        }
    }

    #[test]
    fn test_read_id_reprompts() {
        let mut console = ScriptedConsole::new(["12a", "", "12"]);
        let id = read_id(&mut console, "ID: ").expect("valid id eventually");

        assert_eq!(id, 12);
        assert_eq!(console.output().matches("Enter a whole-number ID.").count(), 2);
    }

    #[test]
    fn test_read_amount_reprompts() {
        let mut console = ScriptedConsole::new(["-3", "lots", "99,90"]);
        let amount = read_amount(&mut console, "Amount: ").expect("valid amount eventually");

        assert_eq!(amount, Decimal::from_str("99.90").expect("valid decimal"));
        assert!(console.output().contains("Amount cannot be negative."));
        assert!(console.output().contains("Enter a number (e.g. 1200.50)."));
    }

    #[test]
    fn test_read_amount_reprompts_when_too_large() {
        let mut console = ScriptedConsole::new(["1e20", "5"]);
        let amount = read_amount(&mut console, "Amount: ").expect("valid amount eventually");

        assert_eq!(amount, Decimal::from(5));
        assert!(console.output().contains("Amount is too large."));
    }

    #[test]
    fn test_read_date_reprompts() {
        let mut console = ScriptedConsole::new(["15-02-2026", "2026-02-15"]);
        let date = read_date(&mut console, "Sale date").expect("valid date eventually");

        assert_eq!(date, "2026-02-15");
        assert!(console.output().starts_with("Sale date (YYYY-MM-DD): "));
        assert!(console.output().contains(DATE_HINT));
    }

    #[test]
    fn test_optional_collectors_accept_blank() {
        let mut console = ScriptedConsole::new(["", "", "", "", ""]);
        assert_eq!(read_optional_id(&mut console, "").expect("line"), None);
        assert_eq!(read_optional_amount(&mut console, "").expect("line"), None);
        assert_eq!(read_optional_date(&mut console, "").expect("line"), None);
        assert_eq!(read_optional_text(&mut console, "").expect("line"), None);
        assert_eq!(read_optional_flag(&mut console, "").expect("line"), None);
    }

    #[test]
    fn test_optional_flag_non_affirmative_is_false() {
        let mut console = ScriptedConsole::new(["maybe"]);
        assert_eq!(read_optional_flag(&mut console, "").expect("line"), Some(false));
    }

    #[test]
    fn test_collectors_propagate_end_of_input() {
        let mut console = ScriptedConsole::new(["x"]);
        let err = read_id(&mut console, "ID: ").expect_err("input runs out");
        assert!(err.is_end_of_input());
    }
}
