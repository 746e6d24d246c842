//! View projection: filtering and joining aggregates with metadata.

use std::collections::BTreeMap;

use cashbook_shared::{Currency, Grouping, Money};

use super::types::{EMPTY_TABLE_MESSAGE, SummaryRow, TableView, TransactionRow};
use crate::aggregation::CategorySummary;
use crate::error::DashboardError;
use crate::metadata::MetadataTable;
use crate::selection::{CategoryFilter, SelectionState};
use crate::transaction::{TransactionCategory, TransactionRecord, TransactionStore};

/// Service for projecting records into render-ready views.
pub struct Projector;

impl Projector {
    /// Records that pass `selection`, in their original order.
    ///
    /// `CategoryFilter::All` returns every record; the result is never
    /// re-sorted.
    #[must_use]
    pub fn project(
        transactions: &[TransactionRecord],
        selection: CategoryFilter,
    ) -> Vec<&TransactionRecord> {
        transactions
            .iter()
            .filter(|record| selection.matches(record.category))
            .collect()
    }

    /// Builds the transactions table for the store's current state.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownCategory` if a shown row's category has
    /// no metadata.
    pub fn table_view(
        store: &TransactionStore,
        selection: CategoryFilter,
        metadata: &MetadataTable,
        grouping: Grouping,
    ) -> Result<TableView, DashboardError> {
        let Some(records) = store.records() else {
            return Ok(TableView::NotLoaded);
        };

        let projected = Self::project(records, selection);
        if projected.is_empty() {
            return Ok(TableView::Empty {
                message: EMPTY_TABLE_MESSAGE.to_string(),
            });
        }

        let rows = projected
            .into_iter()
            .map(|record| Self::row(record, metadata, grouping))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TableView::Rows { rows })
    }

    fn row(
        record: &TransactionRecord,
        metadata: &MetadataTable,
        grouping: Grouping,
    ) -> Result<TransactionRow, DashboardError> {
        let display = metadata.metadata_for(record.category)?;

        Ok(TransactionRow {
            id: record.id,
            date: record.date,
            date_label: record.date.format("%b %d, %Y").to_string(),
            category: record.category,
            category_label: display.label.clone(),
            badge_color: display.badge_color.clone(),
            description: record.description.clone(),
            amount: record.amount,
            amount_label: record.amount.format_grouped(grouping),
            flow: record.flow(),
            status: record.status,
        })
    }

    /// Joins summaries with metadata for the categories in `order`.
    ///
    /// A category missing from `summaries` is shown with zero totals.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownCategory` if a category has no
    /// metadata.
    pub fn summary_rows(
        summaries: &BTreeMap<TransactionCategory, CategorySummary>,
        order: &[TransactionCategory],
        metadata: &MetadataTable,
        selection: &SelectionState,
        currency: Currency,
    ) -> Result<Vec<SummaryRow>, DashboardError> {
        order
            .iter()
            .map(|&category| {
                let display = metadata.metadata_for(category)?;
                let summary = summaries
                    .get(&category)
                    .cloned()
                    .unwrap_or_else(|| CategorySummary::empty(category));
                let total = Money::new(summary.monthly_total, currency);

                Ok(SummaryRow {
                    category,
                    title: display.card_title.clone(),
                    icon: display.icon.clone(),
                    badge_color: display.badge_color.clone(),
                    accent: display.accent.clone(),
                    monthly_total: total,
                    total_label: total.format_compact(),
                    transaction_count: summary.transaction_count,
                    percent_change: summary.percent_change,
                    percent_label: summary.percent_change.to_string(),
                    trend: summary.trend(),
                    active: selection.is_active(category),
                })
            })
            .collect()
    }
}
