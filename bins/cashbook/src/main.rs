//! Cashbook dashboard demo.
//!
//! Loads a JSON fixture of transactions and prints the dashboard view.

use anyhow::Context;
use chrono::NaiveDate;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cashbook_core::transaction::{FetchOutcome, RawTransaction, ingest};
use cashbook_core::{
    DashboardError, DashboardOptions, DashboardService, DashboardState, MetadataTable,
    SelectionState, TransactionStore,
};
use cashbook_shared::{AppConfig, LoggingConfig};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let dashboard = &config.dashboard;
    let today = dashboard.today().context("Invalid dashboard timezone")?;
    info!(%today, currency = %dashboard.currency, "Building dashboard");

    let raw = std::fs::read_to_string(&dashboard.fixture_path)
        .with_context(|| format!("Failed to read fixture {}", dashboard.fixture_path))?;
    let rows: Vec<RawTransaction> =
        serde_json::from_str(&raw).context("Fixture is not a list of transactions")?;

    let state = build_state(rows, &config, today);
    println!("{}", serde_json::to_string_pretty(&state)?);

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays valid JSON
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_state(
    rows: Vec<RawTransaction>,
    config: &AppConfig,
    today: NaiveDate,
) -> DashboardState {
    let dashboard = &config.dashboard;
    let failed = |err: DashboardError| {
        warn!(code = err.error_code(), error = %err, "Dashboard unavailable");
        DashboardState::Failed((&err).into())
    };

    let mut store = TransactionStore::new(dashboard.currency);
    let ticket = store.begin_fetch();
    let applied = ingest(rows, dashboard.currency)
        .and_then(|records| store.complete_fetch(ticket, records));
    match applied {
        Ok(FetchOutcome::Applied) => {
            info!(records = store.records_or_empty().len(), "Fixture loaded");
        }
        Ok(FetchOutcome::Stale) => {}
        Err(err) => return failed(err),
    }

    let mut selection = SelectionState::new();
    if let Err(err) = selection.select_key(&dashboard.selected_category) {
        return failed(err);
    }

    let options = match DashboardOptions::month_over_month(today, dashboard.chart_months) {
        Ok(options) => options.with_grouping(dashboard.grouping),
        Err(err) => return failed(err),
    };

    let metadata = match &dashboard.metadata {
        Some(overrides) => match MetadataTable::from_overrides(overrides) {
            Ok(table) => table,
            Err(err) => return failed(err),
        },
        None => MetadataTable::builtin(),
    };

    DashboardService::render(&store, &selection, &options, &metadata)
}
