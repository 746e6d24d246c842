//! Dashboard view types.

use cashbook_shared::{Currency, Money};
use serde::Serialize;

use crate::aggregation::{MonthlySeries, PercentChange, Trend};
use crate::error::DashboardError;
use crate::metadata::StatCardKind;
use crate::period::PeriodComparison;
use crate::projection::{SummaryRow, TableView};
use crate::selection::CategoryFilter;

/// Title of the overview chart.
pub const CHART_TITLE: &str = "Sales & Collection Overview";

/// One headline stat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Card kind.
    pub kind: StatCardKind,
    /// Card title.
    pub title: String,
    /// Icon name.
    pub icon: String,
    /// Icon background colour.
    pub background: String,
    /// Current-period total.
    pub value: Money,
    /// Compact total, e.g. `"₹15.6L"`.
    pub value_label: String,
    /// Change versus the comparison period.
    pub percent_change: PercentChange,
    /// Change as shown.
    pub percent_label: String,
    /// Direction for positive/negative styling.
    pub trend: Trend,
}

/// The overview chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartView {
    /// Chart title.
    pub title: String,
    /// Range selector label, e.g. `"Last 6 Months"`.
    pub range_label: String,
    /// One series per charted category.
    pub series: Vec<MonthlySeries>,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// Currency of every amount.
    pub currency: Currency,
    /// Reporting period.
    pub period: PeriodComparison,
    /// Headline cards.
    pub stat_cards: Vec<StatCard>,
    /// Cashbook summary rows.
    pub cashbook: Vec<SummaryRow>,
    /// Overview chart.
    pub chart: ChartView,
    /// Transactions table.
    pub table: TableView,
    /// Active category filter.
    pub selection: CategoryFilter,
}

/// Displayable error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    /// Stable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl From<&DashboardError> for ErrorView {
    fn from(err: &DashboardError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Outcome of building the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum DashboardState {
    /// The dashboard was built.
    Ready(Box<DashboardView>),
    /// Building failed; show the error state.
    Failed(ErrorView),
}

impl DashboardState {
    /// Returns true if the dashboard was built.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
