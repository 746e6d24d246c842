//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts arrive as display strings (`"145,000"`, `"-₹5,000"`) and are parsed
//! exactly once into a `rust_decimal::Decimal`. Parsing never rounds: input
//! that cannot be represented losslessly is rejected.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., rupees), at its parsed scale.
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "INR", "USD").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee
    #[default]
    Inr,
    /// US Dollar
    Usd,
    /// Indonesian Rupiah
    Idr,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

/// Errors raised while parsing a display amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Nothing to parse.
    #[error("Amount is empty")]
    Empty,

    /// A character other than digits, separators, sign or symbol.
    #[error("Amount contains an invalid character: {0:?}")]
    InvalidCharacter(String),

    /// Group separators are not at valid positions.
    #[error("Amount has misplaced group separators: {0:?}")]
    MisplacedSeparator(String),

    /// More fraction digits than the currency allows.
    #[error("Amount {input:?} has more than {max} fraction digits")]
    ExcessPrecision {
        /// The rejected input.
        input: String,
        /// Fraction digits allowed by the currency.
        max: u32,
    },

    /// Too many significant digits for a decimal.
    #[error("Amount is out of range: {0:?}")]
    OutOfRange(String),
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Parses a display amount such as `"145,000"`, `"1,45,000"`,
    /// `"-₹5,000.50"` or `"1234"`.
    ///
    /// Accepted grouping is either groups of three (`1,234,567`) or the
    /// Indian lakh grouping (`12,34,567`). The sign may precede or follow
    /// the currency symbol.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] when the input is not an exact amount in
    /// `currency`.
    pub fn parse(input: &str, currency: Currency) -> Result<Self, MoneyError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::Empty);
        }

        let (negative, rest) = split_sign(trimmed);
        let rest = rest
            .strip_prefix(currency.symbol())
            .map_or(rest, str::trim_start);
        let (negative, rest) = if negative {
            (true, rest)
        } else {
            split_sign(rest)
        };

        let (integer, fraction) = match rest.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (rest, None),
        };

        if integer.is_empty() {
            return Err(match fraction {
                None => MoneyError::Empty,
                Some(_) => MoneyError::InvalidCharacter(input.to_string()),
            });
        }

        let digits = strip_group_separators(integer, input)?;

        let mut normalized = String::with_capacity(rest.len() + 1);
        if negative {
            normalized.push('-');
        }
        normalized.push_str(&digits);

        if let Some(fraction) = fraction {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MoneyError::InvalidCharacter(input.to_string()));
            }
            let max = currency.minor_units();
            if fraction.len() > max as usize {
                return Err(MoneyError::ExcessPrecision {
                    input: input.to_string(),
                    max,
                });
            }
            normalized.push('.');
            normalized.push_str(fraction);
        }

        let amount = Decimal::from_str_exact(&normalized)
            .map_err(|_| MoneyError::OutOfRange(input.to_string()))?;

        Ok(Self::new(amount, currency))
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest.trim_start())
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest.trim_start())
    } else {
        (false, s)
    }
}

/// Removes `,` separators from the integer part after checking their
/// positions.
fn strip_group_separators(integer: &str, input: &str) -> Result<String, MoneyError> {
    if !integer.bytes().all(|b| b.is_ascii_digit() || b == b',') {
        return Err(MoneyError::InvalidCharacter(input.to_string()));
    }

    let groups: Vec<&str> = integer.split(',').collect();
    if groups.iter().any(|g| g.is_empty()) {
        return Err(MoneyError::MisplacedSeparator(input.to_string()));
    }
    if groups.len() > 1 && !(is_western_grouping(&groups) || is_indian_grouping(&groups)) {
        return Err(MoneyError::MisplacedSeparator(input.to_string()));
    }

    Ok(groups.concat())
}

fn is_western_grouping(groups: &[&str]) -> bool {
    groups[0].len() <= 3 && groups[1..].iter().all(|g| g.len() == 3)
}

fn is_indian_grouping(groups: &[&str]) -> bool {
    let Some((last, head)) = groups.split_last() else {
        return false;
    };
    last.len() == 3 && head[0].len() <= 2 && head[1..].iter().all(|g| g.len() == 2)
}

impl Currency {
    /// Display symbol used as an amount prefix.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Idr => "Rp",
            Self::Eur => "€",
            Self::Sgd => "S$",
            Self::Jpy => "¥",
        }
    }

    /// Number of fraction digits an amount may carry.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        match self {
            Self::Jpy => 0,
            Self::Inr | Self::Usd | Self::Idr | Self::Eur | Self::Sgd => 2,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inr => write!(f, "INR"),
            Self::Usd => write!(f, "USD"),
            Self::Idr => write!(f, "IDR"),
            Self::Eur => write!(f, "EUR"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "IDR" => Ok(Self::Idr),
            "EUR" => Ok(Self::Eur),
            "SGD" => Ok(Self::Sgd),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_money_zero() {
        let money = Money::zero(Currency::Inr);
        assert!(money.is_zero());
        assert!(!money.is_negative());
        assert_eq!(money.currency, Currency::Inr);
    }

    #[rstest]
    #[case("145,000", dec!(145000))]
    #[case("1,45,000", dec!(145000))]
    #[case("12,34,567", dec!(1234567))]
    #[case("1,234,567", dec!(1234567))]
    #[case("25000", dec!(25000))]
    #[case("-5,000", dec!(-5000))]
    #[case("+8,000", dec!(8000))]
    #[case("₹15,000", dec!(15000))]
    #[case("-₹5,000", dec!(-5000))]
    #[case("₹-5,000", dec!(-5000))]
    #[case("  1,234.50 ", dec!(1234.50))]
    #[case("0", dec!(0))]
    fn test_parse_valid_amounts(#[case] input: &str, #[case] expected: Decimal) {
        let money = Money::parse(input, Currency::Inr).unwrap();
        assert_eq!(money.amount, expected);
        assert_eq!(money.currency, Currency::Inr);
    }

    #[test]
    fn test_parse_keeps_scale() {
        let money = Money::parse("1,234.50", Currency::Inr).unwrap();
        assert_eq!(money.amount.scale(), 2);
        assert_eq!(money.amount.to_string(), "1234.50");
    }

    #[rstest]
    #[case("", MoneyError::Empty)]
    #[case("   ", MoneyError::Empty)]
    #[case("12a", MoneyError::InvalidCharacter("12a".into()))]
    #[case("$100", MoneyError::InvalidCharacter("$100".into()))]
    #[case("1,2,3", MoneyError::MisplacedSeparator("1,2,3".into()))]
    #[case("1,,000", MoneyError::MisplacedSeparator("1,,000".into()))]
    #[case(",000", MoneyError::MisplacedSeparator(",000".into()))]
    #[case("1000,", MoneyError::MisplacedSeparator("1000,".into()))]
    #[case("1.", MoneyError::InvalidCharacter("1.".into()))]
    #[case("1.2.3", MoneyError::InvalidCharacter("1.2.3".into()))]
    #[case("-", MoneyError::Empty)]
    #[case("₹", MoneyError::Empty)]
    #[case("-₹ ", MoneyError::Empty)]
    #[case(".50", MoneyError::InvalidCharacter(".50".into()))]
    #[case("-.5", MoneyError::InvalidCharacter("-.5".into()))]
    fn test_parse_rejects_malformed(#[case] input: &str, #[case] expected: MoneyError) {
        assert_eq!(Money::parse(input, Currency::Inr), Err(expected));
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        let err = Money::parse("10.505", Currency::Inr).unwrap_err();
        assert_eq!(
            err,
            MoneyError::ExcessPrecision {
                input: "10.505".into(),
                max: 2
            }
        );

        assert!(Money::parse("100.5", Currency::Jpy).is_err());
        assert!(Money::parse("100", Currency::Jpy).is_ok());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let huge = "9".repeat(40);
        assert_eq!(
            Money::parse(&huge, Currency::Usd),
            Err(MoneyError::OutOfRange(huge.clone()))
        );
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        let money = Money::parse("-0", Currency::Inr).unwrap();
        assert!(money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_currency_display_and_symbol() {
        assert_eq!(Currency::Inr.to_string(), "INR");
        assert_eq!(Currency::Inr.symbol(), "₹");
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Jpy.minor_units(), 0);
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("INR").unwrap(), Currency::Inr);
        assert_eq!(Currency::from_str("inr").unwrap(), Currency::Inr);
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }
}
