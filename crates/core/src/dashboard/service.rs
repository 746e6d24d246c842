//! Dashboard assembly.
//!
//! Builds the full [`DashboardView`] from the store, the selection and the
//! metadata table. Every figure comes from the same record set.

use std::collections::BTreeMap;

use cashbook_shared::{Currency, Grouping, Money};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{CHART_TITLE, ChartView, DashboardState, DashboardView, StatCard};
use crate::aggregation::{Aggregator, CategorySummary, PercentChange, StatusSummary};
use crate::error::DashboardError;
use crate::metadata::{MetadataTable, StatCardKind, StatSource};
use crate::period::PeriodComparison;
use crate::projection::Projector;
use crate::selection::SelectionState;
use crate::transaction::{PaymentStatus, TransactionCategory, TransactionStore};

/// What to show and over which period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Reporting period.
    pub period: PeriodComparison,
    /// Months on the overview chart, ending with the current month.
    pub chart_months: u32,
    /// Categories charted on the overview.
    pub chart_categories: Vec<TransactionCategory>,
    /// Categories listed in the cashbook, in display order.
    pub cashbook_categories: Vec<TransactionCategory>,
    /// Digit grouping for table amounts.
    pub grouping: Grouping,
}

impl DashboardOptions {
    /// This month versus last month, with the default chart and cashbook
    /// layout.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidPeriod` if `today` has no previous
    /// month or `chart_months` is zero.
    pub fn month_over_month(today: NaiveDate, chart_months: u32) -> Result<Self, DashboardError> {
        if chart_months == 0 {
            return Err(DashboardError::InvalidPeriod(
                "chart needs at least one month".to_string(),
            ));
        }

        Ok(Self {
            period: PeriodComparison::month_over_month(today)?,
            chart_months,
            chart_categories: vec![TransactionCategory::Sale, TransactionCategory::Collection],
            cashbook_categories: vec![
                TransactionCategory::Purchase,
                TransactionCategory::Expense,
                TransactionCategory::Collection,
            ],
            grouping: Grouping::default(),
        })
    }

    /// Sets the digit grouping.
    #[must_use]
    pub const fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }
}

/// Service for building dashboard views.
pub struct DashboardService;

impl DashboardService {
    /// Builds the dashboard.
    ///
    /// Before the first fetch completes, aggregates are computed over an
    /// empty record set and the table reports `NotLoaded`.
    ///
    /// # Errors
    ///
    /// Propagates aggregation, metadata and period errors.
    pub fn build(
        store: &TransactionStore,
        selection: &SelectionState,
        options: &DashboardOptions,
        metadata: &MetadataTable,
    ) -> Result<DashboardView, DashboardError> {
        let records = store.records_or_empty();
        let currency = store.currency();

        let categories = Aggregator::summarize_categories(records, &options.period)?;
        let statuses = Aggregator::summarize_statuses(records, &options.period)?;

        let stat_cards = StatCardKind::ALL
            .into_iter()
            .map(|kind| stat_card(kind, &categories, &statuses, currency))
            .collect();

        let cashbook = Projector::summary_rows(
            &categories,
            &options.cashbook_categories,
            metadata,
            selection,
            currency,
        )?;

        let chart = ChartView {
            title: CHART_TITLE.to_string(),
            range_label: range_label(options.chart_months),
            series: Aggregator::monthly_series(
                records,
                &options.chart_categories,
                options.period.current().end(),
                options.chart_months,
            )?,
        };

        let table =
            Projector::table_view(store, selection.current(), metadata, options.grouping)?;

        debug!(
            selection = %selection.current(),
            rows = table.len(),
            "Dashboard built"
        );

        Ok(DashboardView {
            currency,
            period: options.period,
            stat_cards,
            cashbook,
            chart,
            table,
            selection: selection.current(),
        })
    }

    /// Builds the dashboard, turning any error into the displayable error
    /// state.
    #[must_use]
    pub fn render(
        store: &TransactionStore,
        selection: &SelectionState,
        options: &DashboardOptions,
        metadata: &MetadataTable,
    ) -> DashboardState {
        match Self::build(store, selection, options, metadata) {
            Ok(view) => DashboardState::Ready(Box::new(view)),
            Err(err) => {
                warn!(code = err.error_code(), error = %err, "Dashboard build failed");
                DashboardState::Failed((&err).into())
            }
        }
    }
}

fn stat_card(
    kind: StatCardKind,
    categories: &BTreeMap<TransactionCategory, CategorySummary>,
    statuses: &BTreeMap<PaymentStatus, StatusSummary>,
    currency: Currency,
) -> StatCard {
    let (total, percent_change) = match kind.source() {
        StatSource::Category(category) => categories
            .get(&category)
            .map(|s| (s.monthly_total, s.percent_change)),
        StatSource::Status(status) => statuses
            .get(&status)
            .map(|s| (s.monthly_total, s.percent_change)),
    }
    .unwrap_or((Decimal::ZERO, PercentChange::NotApplicable));

    let value = Money::new(total, currency);
    StatCard {
        kind,
        title: kind.title().to_string(),
        icon: kind.icon().to_string(),
        background: kind.background().to_string(),
        value,
        value_label: value.format_compact(),
        percent_change,
        percent_label: percent_change.to_string(),
        trend: percent_change.trend(),
    }
}

fn range_label(months: u32) -> String {
    if months == 1 {
        "Last Month".to_string()
    } else {
        format!("Last {months} Months")
    }
}
