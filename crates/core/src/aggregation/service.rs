//! Aggregation service: period totals, percentage deltas and chart series.
//!
//! Every figure shown on the dashboard is derived here from the record set,
//! so stat cards, cashbook rows and chart series cannot drift apart.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{CategorySummary, MonthlyPoint, MonthlySeries, PercentChange, StatusSummary};
use crate::error::DashboardError;
use crate::period::{PeriodComparison, TimeWindow};
use crate::transaction::{PaymentStatus, TransactionCategory, TransactionRecord};

/// Service for aggregating transaction records.
pub struct Aggregator;

#[derive(Debug, Default, Clone, Copy)]
struct GroupTotals {
    current: Decimal,
    comparison: Decimal,
    count: usize,
}

impl GroupTotals {
    fn percent_change(&self) -> PercentChange {
        PercentChange::between(self.current, self.comparison)
    }
}

impl Aggregator {
    /// Computes per-category totals for `current` versus `comparison`.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidPeriod` if `comparison` does not end
    /// strictly before `current` starts, or `DashboardError::CurrencyMismatch`
    /// if the records mix currencies.
    pub fn compute_summaries(
        transactions: &[TransactionRecord],
        current: TimeWindow,
        comparison: TimeWindow,
    ) -> Result<BTreeMap<TransactionCategory, CategorySummary>, DashboardError> {
        let period = PeriodComparison::new(current, comparison)?;
        Self::summarize_categories(transactions, &period)
    }

    /// Computes per-category totals over an already validated period.
    ///
    /// Every category of the closed set is present in the result; categories
    /// with no records have zero totals and a `NotApplicable` change.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::CurrencyMismatch` if the records mix
    /// currencies, or `DashboardError::AmountOverflow` if a total exceeds the
    /// decimal range.
    pub fn summarize_categories(
        transactions: &[TransactionRecord],
        period: &PeriodComparison,
    ) -> Result<BTreeMap<TransactionCategory, CategorySummary>, DashboardError> {
        ensure_single_currency(transactions)?;

        let totals = group_totals(transactions, period, &TransactionCategory::ALL, |r| {
            r.category
        })?;

        Ok(totals
            .into_iter()
            .map(|(category, totals)| {
                let summary = CategorySummary {
                    category,
                    monthly_total: totals.current,
                    comparison_total: totals.comparison,
                    percent_change: totals.percent_change(),
                    transaction_count: totals.count,
                };
                (category, summary)
            })
            .collect())
    }

    /// Computes per-status totals over a period.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::CurrencyMismatch` if the records mix
    /// currencies, or `DashboardError::AmountOverflow` if a total exceeds the
    /// decimal range.
    pub fn summarize_statuses(
        transactions: &[TransactionRecord],
        period: &PeriodComparison,
    ) -> Result<BTreeMap<PaymentStatus, StatusSummary>, DashboardError> {
        ensure_single_currency(transactions)?;

        let totals = group_totals(transactions, period, &PaymentStatus::ALL, |r| r.status)?;

        Ok(totals
            .into_iter()
            .map(|(status, totals)| {
                let summary = StatusSummary {
                    status,
                    monthly_total: totals.current,
                    comparison_total: totals.comparison,
                    percent_change: totals.percent_change(),
                    transaction_count: totals.count,
                };
                (status, summary)
            })
            .collect())
    }

    /// Sum of all amounts dated within `window`.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::AmountOverflow` if the sum exceeds the decimal
    /// range.
    pub fn window_total(
        transactions: &[TransactionRecord],
        window: TimeWindow,
    ) -> Result<Decimal, DashboardError> {
        checked_sum(
            transactions
                .iter()
                .filter(|r| window.contains(r.date))
                .map(|r| r.amount.amount),
        )
    }

    /// Monthly totals for each of `categories`, covering `months` calendar
    /// months that end with the month of `last_month`.
    ///
    /// Months without records are reported as zero.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidPeriod` if `months` is zero,
    /// `DashboardError::CurrencyMismatch` if the records mix currencies, or
    /// `DashboardError::AmountOverflow` if a monthly total exceeds the decimal
    /// range.
    pub fn monthly_series(
        transactions: &[TransactionRecord],
        categories: &[TransactionCategory],
        last_month: NaiveDate,
        months: u32,
    ) -> Result<Vec<MonthlySeries>, DashboardError> {
        ensure_single_currency(transactions)?;
        let windows = TimeWindow::trailing_months(last_month, months)?;

        categories
            .iter()
            .map(|&category| {
                let points = windows
                    .iter()
                    .map(|window| {
                        let total = checked_sum(
                            transactions
                                .iter()
                                .filter(|r| r.category == category && window.contains(r.date))
                                .map(|r| r.amount.amount),
                        )?;
                        Ok(MonthlyPoint {
                            month: window.start(),
                            label: window.start().format("%b %Y").to_string(),
                            total,
                        })
                    })
                    .collect::<Result<Vec<_>, DashboardError>>()?;
                Ok(MonthlySeries { category, points })
            })
            .collect()
    }
}

/// Sums the current and comparison windows per key. Every key in `keys`
/// appears in the result.
fn group_totals<K, F>(
    transactions: &[TransactionRecord],
    period: &PeriodComparison,
    keys: &[K],
    key_of: F,
) -> Result<BTreeMap<K, GroupTotals>, DashboardError>
where
    K: Ord + Copy,
    F: Fn(&TransactionRecord) -> K,
{
    let mut totals: BTreeMap<K, GroupTotals> =
        keys.iter().map(|&k| (k, GroupTotals::default())).collect();

    for record in transactions {
        let entry = totals.entry(key_of(record)).or_default();
        if period.current().contains(record.date) {
            entry.current = add_amount(entry.current, record.amount.amount)?;
            entry.count += 1;
        } else if period.comparison().contains(record.date) {
            entry.comparison = add_amount(entry.comparison, record.amount.amount)?;
        }
    }

    Ok(totals)
}

fn add_amount(total: Decimal, amount: Decimal) -> Result<Decimal, DashboardError> {
    total.checked_add(amount).ok_or_else(|| {
        DashboardError::AmountOverflow(format!("{total} + {amount} exceeds the decimal range"))
    })
}

fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal, DashboardError> {
    amounts.into_iter().try_fold(Decimal::ZERO, add_amount)
}

fn ensure_single_currency(transactions: &[TransactionRecord]) -> Result<(), DashboardError> {
    let Some(first) = transactions.first() else {
        return Ok(());
    };
    let expected = first.amount.currency;

    match transactions
        .iter()
        .find(|r| r.amount.currency != expected)
    {
        Some(other) => Err(DashboardError::CurrencyMismatch {
            expected,
            got: other.amount.currency,
        }),
        None => Ok(()),
    }
}
