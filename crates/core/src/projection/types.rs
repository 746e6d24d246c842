//! Render-ready projection types.

use cashbook_shared::{Money, TransactionId};
use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregation::{PercentChange, Trend};
use crate::transaction::{Flow, PaymentStatus, TransactionCategory};

/// Message shown when a loaded record set has no rows for the filter.
pub const EMPTY_TABLE_MESSAGE: &str = "No transactions found.";

/// One row of the transactions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    /// Row key.
    pub id: TransactionId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Date as shown, e.g. `"Dec 28, 2024"`.
    pub date_label: String,
    /// Category key.
    pub category: TransactionCategory,
    /// Category badge text.
    pub category_label: String,
    /// Category badge colour.
    pub badge_color: String,
    /// Free-text label.
    pub description: String,
    /// Signed amount.
    pub amount: Money,
    /// Amount as shown, e.g. `"₹145,000"`.
    pub amount_label: String,
    /// Inflow or outflow, for amount colouring.
    pub flow: Flow,
    /// Payment status.
    pub status: PaymentStatus,
}

/// The transactions table in one of its three states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TableView {
    /// No fetch has completed yet.
    NotLoaded,
    /// Records are loaded but none pass the filter.
    Empty {
        /// Text for the empty-state row.
        message: String,
    },
    /// Filtered rows in store order.
    Rows {
        /// The rows.
        rows: Vec<TransactionRow>,
    },
}

impl TableView {
    /// Number of rows shown.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Rows { rows } => rows.len(),
            Self::NotLoaded | Self::Empty { .. } => 0,
        }
    }

    /// Returns true if no rows are shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One cashbook summary row: an aggregate joined with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Category key; selecting the row filters the table by it.
    pub category: TransactionCategory,
    /// Row title.
    pub title: String,
    /// Icon name.
    pub icon: String,
    /// Icon background colour.
    pub badge_color: String,
    /// Accent colour for the amount.
    pub accent: String,
    /// Current-period total.
    pub monthly_total: Money,
    /// Compact total, e.g. `"₹8.5L"`.
    pub total_label: String,
    /// Records in the current period.
    pub transaction_count: usize,
    /// Change versus the comparison period.
    pub percent_change: PercentChange,
    /// Change as shown, e.g. `"+5.2%"` or `"N/A"`.
    pub percent_label: String,
    /// Direction for positive/negative styling.
    pub trend: Trend,
    /// True when this category is the active filter.
    pub active: bool,
}
