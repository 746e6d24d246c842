//! Aggregation result types.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::transaction::{PaymentStatus, TransactionCategory};

/// Percentage change of a total versus the comparison period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PercentChange {
    /// Signed percentage, rounded to two decimal places.
    Change(Decimal),
    /// The comparison total was zero; no percentage exists.
    NotApplicable,
}

impl PercentChange {
    /// Computes `(current - comparison) / |comparison| * 100`.
    ///
    /// Dividing by the magnitude keeps the sign meaning "went up" even when
    /// the comparison total is negative. A change outside the decimal range
    /// is `NotApplicable`.
    #[must_use]
    pub fn between(current: Decimal, comparison: Decimal) -> Self {
        if comparison.is_zero() {
            return Self::NotApplicable;
        }

        current
            .checked_sub(comparison)
            .and_then(|delta| delta.checked_div(comparison.abs()))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(Self::NotApplicable, |percent| Self::Change(percent.round_dp(2)))
    }

    /// The percentage, if one exists.
    #[must_use]
    pub const fn value(&self) -> Option<Decimal> {
        match self {
            Self::Change(value) => Some(*value),
            Self::NotApplicable => None,
        }
    }

    /// Direction of the change, independent of the total's sign.
    #[must_use]
    pub fn trend(&self) -> Trend {
        match self {
            Self::Change(value) if value.is_zero() => Trend::Flat,
            Self::Change(value) if value.is_sign_positive() => Trend::Up,
            Self::Change(_) => Trend::Down,
            Self::NotApplicable => Trend::Unknown,
        }
    }
}

impl std::fmt::Display for PercentChange {
    /// `+5.2%`, `-2.1%`, `0.0%` or `N/A`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self::Change(value) = self else {
            return write!(f, "N/A");
        };

        let mut shown = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        shown.rescale(1);
        if shown.is_zero() {
            write!(f, "0.0%")
        } else if shown.is_sign_positive() {
            write!(f, "+{shown}%")
        } else {
            write!(f, "{shown}%")
        }
    }
}

/// Direction indicator for positive/negative styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Increased versus the comparison period.
    Up,
    /// Decreased versus the comparison period.
    Down,
    /// Unchanged.
    Flat,
    /// No comparison available.
    Unknown,
}

/// Totals for one category over a period comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Category key.
    pub category: TransactionCategory,
    /// Sum of amounts in the current window.
    pub monthly_total: Decimal,
    /// Sum of amounts in the comparison window.
    pub comparison_total: Decimal,
    /// Change of `monthly_total` versus `comparison_total`.
    pub percent_change: PercentChange,
    /// Number of records in the current window.
    pub transaction_count: usize,
}

impl CategorySummary {
    /// A summary with no records in either window.
    #[must_use]
    pub fn empty(category: TransactionCategory) -> Self {
        Self {
            category,
            monthly_total: Decimal::ZERO,
            comparison_total: Decimal::ZERO,
            percent_change: PercentChange::NotApplicable,
            transaction_count: 0,
        }
    }

    /// Direction of the change.
    #[must_use]
    pub fn trend(&self) -> Trend {
        self.percent_change.trend()
    }
}

/// Totals for one payment status over a period comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    /// Status key.
    pub status: PaymentStatus,
    /// Sum of amounts in the current window.
    pub monthly_total: Decimal,
    /// Sum of amounts in the comparison window.
    pub comparison_total: Decimal,
    /// Change of `monthly_total` versus `comparison_total`.
    pub percent_change: PercentChange,
    /// Number of records in the current window.
    pub transaction_count: usize,
}

impl StatusSummary {
    /// Direction of the change.
    #[must_use]
    pub fn trend(&self) -> Trend {
        self.percent_change.trend()
    }
}

/// One month of a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    /// First day of the month.
    pub month: NaiveDate,
    /// Axis label, e.g. `"Dec 2024"`.
    pub label: String,
    /// Sum of amounts in the month.
    pub total: Decimal,
}

/// Monthly totals of one category, oldest month first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySeries {
    /// Category key.
    pub category: TransactionCategory,
    /// One point per month.
    pub points: Vec<MonthlyPoint>,
}
