//! Property-based tests for the projector.

use cashbook_shared::{Currency, Money};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::Projector;
use crate::selection::CategoryFilter;
use crate::transaction::{PaymentStatus, TransactionCategory, TransactionRecord};

fn category_strategy() -> impl Strategy<Value = TransactionCategory> {
    prop_oneof![
        Just(TransactionCategory::Sale),
        Just(TransactionCategory::Purchase),
        Just(TransactionCategory::Expense),
        Just(TransactionCategory::Collection),
    ]
}

fn filter_strategy() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        category_strategy().prop_map(CategoryFilter::Only),
    ]
}

fn record_strategy() -> impl Strategy<Value = TransactionRecord> {
    (0u64..365, category_strategy(), -1_000_000i64..1_000_000i64).prop_map(
        |(offset, category, cents)| {
            TransactionRecord::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(offset),
                category,
                "Generated",
                Money::new(Decimal::new(cents, 2), Currency::Inr),
                PaymentStatus::Pending,
            )
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A category filter keeps only that category, in original relative order.
    #[test]
    fn prop_project_is_ordered_subsequence(
        records in prop::collection::vec(record_strategy(), 0..50),
        category in category_strategy(),
    ) {
        let projected = Projector::project(&records, CategoryFilter::Only(category));

        prop_assert!(projected.iter().all(|r| r.category == category));

        let expected: Vec<_> = records
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.id)
            .collect();
        let actual: Vec<_> = projected.iter().map(|r| r.id).collect();
        prop_assert_eq!(actual, expected);
    }

    /// "All" returns the input unchanged.
    #[test]
    fn prop_project_all_is_identity(
        records in prop::collection::vec(record_strategy(), 0..50),
    ) {
        let projected: Vec<TransactionRecord> = Projector::project(&records, CategoryFilter::All)
            .into_iter()
            .cloned()
            .collect();
        prop_assert_eq!(projected, records);
    }

    /// Projection is deterministic and idempotent.
    #[test]
    fn prop_project_is_deterministic(
        records in prop::collection::vec(record_strategy(), 0..50),
        filter in filter_strategy(),
    ) {
        let first = Projector::project(&records, filter);
        let second = Projector::project(&records, filter);
        prop_assert_eq!(&first, &second);

        let reprojected: Vec<TransactionRecord> = first.into_iter().cloned().collect();
        let again = Projector::project(&reprojected, filter);
        prop_assert_eq!(again.len(), reprojected.len());
    }

    /// Every record lands in exactly one category projection.
    #[test]
    fn prop_category_projections_partition_input(
        records in prop::collection::vec(record_strategy(), 0..50),
    ) {
        let total: usize = TransactionCategory::ALL
            .into_iter()
            .map(|c| Projector::project(&records, CategoryFilter::Only(c)).len())
            .sum();
        prop_assert_eq!(total, records.len());
    }
}
