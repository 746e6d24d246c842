//! Property-based tests for the aggregation service.

use cashbook_shared::{Currency, Money};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::Aggregator;
use super::types::PercentChange;
use crate::period::PeriodComparison;
use crate::transaction::{PaymentStatus, TransactionCategory, TransactionRecord};

fn category_strategy() -> impl Strategy<Value = TransactionCategory> {
    prop_oneof![
        Just(TransactionCategory::Sale),
        Just(TransactionCategory::Purchase),
        Just(TransactionCategory::Expense),
        Just(TransactionCategory::Collection),
    ]
}

fn status_strategy() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![Just(PaymentStatus::Paid), Just(PaymentStatus::Pending)]
}

/// Records dated between Oct 1 and Dec 31, 2024 with amounts up to ±1,000,000.00.
fn record_strategy() -> impl Strategy<Value = TransactionRecord> {
    (
        0u64..92,
        category_strategy(),
        -100_000_000i64..100_000_000i64,
        status_strategy(),
    )
        .prop_map(|(offset, category, cents, status)| {
            let base = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
            TransactionRecord::new(
                base + Days::new(offset),
                category,
                "Generated",
                Money::new(Decimal::new(cents, 2), Currency::Inr),
                status,
            )
        })
}

fn december() -> PeriodComparison {
    PeriodComparison::month_over_month(NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Category totals in the current window add up to the window total:
    /// nothing is counted twice and nothing is dropped.
    #[test]
    fn prop_category_totals_sum_to_period_total(
        records in prop::collection::vec(record_strategy(), 0..40),
    ) {
        let period = december();
        let summaries = Aggregator::summarize_categories(&records, &period).unwrap();

        let by_category: Decimal = summaries.values().map(|s| s.monthly_total).sum();
        let expected = Aggregator::window_total(&records, period.current()).unwrap();
        prop_assert_eq!(by_category, expected);

        let comparison: Decimal = summaries.values().map(|s| s.comparison_total).sum();
        prop_assert_eq!(
            comparison,
            Aggregator::window_total(&records, period.comparison()).unwrap()
        );
    }

    /// Record counts per category add up to the records in the window.
    #[test]
    fn prop_category_counts_cover_current_window(
        records in prop::collection::vec(record_strategy(), 0..40),
    ) {
        let period = december();
        let summaries = Aggregator::summarize_categories(&records, &period).unwrap();

        let counted: usize = summaries.values().map(|s| s.transaction_count).sum();
        let expected = records
            .iter()
            .filter(|r| period.current().contains(r.date))
            .count();
        prop_assert_eq!(counted, expected);
    }

    /// Status totals partition the same window total as category totals.
    #[test]
    fn prop_status_totals_sum_to_period_total(
        records in prop::collection::vec(record_strategy(), 0..40),
    ) {
        let period = december();
        let summaries = Aggregator::summarize_statuses(&records, &period).unwrap();

        let by_status: Decimal = summaries.values().map(|s| s.monthly_total).sum();
        prop_assert_eq!(
            by_status,
            Aggregator::window_total(&records, period.current()).unwrap()
        );
    }

    /// A zero comparison total never produces a percentage.
    #[test]
    fn prop_zero_comparison_is_not_applicable(current in -100_000_000i64..100_000_000i64) {
        prop_assert_eq!(
            PercentChange::between(Decimal::new(current, 2), Decimal::ZERO),
            PercentChange::NotApplicable
        );
    }

    /// Aggregation is pure: identical inputs give identical summaries.
    #[test]
    fn prop_summaries_are_deterministic(
        records in prop::collection::vec(record_strategy(), 0..20),
    ) {
        let period = december();
        let first = Aggregator::summarize_categories(&records, &period).unwrap();
        let second = Aggregator::summarize_categories(&records, &period).unwrap();
        prop_assert_eq!(first, second);
    }
}
