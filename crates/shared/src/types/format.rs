//! Display formatting for money amounts.
//!
//! Formatting is exact: grouped output keeps every digit and the stored
//! scale, and compact output rounds only the already-divided unit count.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::money::{Currency, Money};

/// Digit grouping convention for the integer part of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Groups of three: `1,234,567`.
    #[default]
    Western,
    /// Last group of three then groups of two: `12,34,567`.
    Indian,
}

/// Inserts group separators into a string of ASCII digits.
#[must_use]
pub fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);

    for (i, ch) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && is_group_boundary(remaining, grouping) {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

fn is_group_boundary(remaining: usize, grouping: Grouping) -> bool {
    match grouping {
        Grouping::Western => remaining % 3 == 0,
        Grouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
    }
}

/// Compact units per currency, largest first.
fn compact_units(currency: Currency) -> [(i64, &'static str); 3] {
    match currency {
        Currency::Inr => [(10_000_000, "Cr"), (100_000, "L"), (1_000, "K")],
        _ => [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")],
    }
}

impl Money {
    /// Formats the amount with its symbol and group separators,
    /// e.g. `₹1,45,000` or `-$1,234.50`.
    #[must_use]
    pub fn format_grouped(&self, grouping: Grouping) -> String {
        let magnitude = self.amount.abs().to_string();
        let (integer, fraction) = match magnitude.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (magnitude.as_str(), None),
        };

        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(self.currency.symbol());
        out.push_str(&group_digits(integer, grouping));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Formats the amount in compact units to one decimal place,
    /// e.g. `₹15.6L`, `₹2.5Cr` or `$1.2M`.
    ///
    /// A value that rounds up to the next unit is shown in that unit
    /// (`₹99,950` is `₹1L`, not `₹100K`). Amounts below the smallest unit
    /// fall back to [`Money::format_grouped`].
    #[must_use]
    pub fn format_compact(&self) -> String {
        let magnitude = self.amount.abs();
        let units = compact_units(self.currency);

        let Some(index) = units
            .iter()
            .position(|&(threshold, _)| magnitude >= Decimal::from(threshold))
        else {
            return self.format_grouped(Grouping::Western);
        };

        let (mut threshold, mut suffix) = units[index];
        let mut shown = round_units(magnitude, threshold);
        if let Some(&(larger, larger_suffix)) = index.checked_sub(1).map(|i| &units[i])
            && shown * Decimal::from(threshold) >= Decimal::from(larger)
        {
            threshold = larger;
            suffix = larger_suffix;
            shown = round_units(magnitude, threshold);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        format!("{sign}{}{shown}{suffix}", self.currency.symbol())
    }
}

fn round_units(magnitude: Decimal, threshold: i64) -> Decimal {
    (magnitude / Decimal::from(threshold))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_grouped(Grouping::Western))
    }
}
