//! Core logic for the cashbook dashboard.
//!
//! This crate contains pure view-model logic with no I/O. Records come in
//! through [`transaction::ingest`]; everything else derives from them.
//!
//! # Modules
//!
//! - `transaction` - Records, ingestion and the fetch-aware store
//! - `period` - Aggregation windows and month-over-month comparison
//! - `aggregation` - Category and status totals, percentage change, chart series
//! - `selection` - The category filter
//! - `projection` - Filtered table rows and cashbook summary rows
//! - `metadata` - Display tokens for categories and stat cards
//! - `dashboard` - Full dashboard assembly and the error state

pub mod aggregation;
pub mod dashboard;
pub mod error;
pub mod metadata;
pub mod period;
pub mod projection;
pub mod selection;
pub mod transaction;

pub use aggregation::{Aggregator, CategorySummary, PercentChange, StatusSummary, Trend};
pub use dashboard::{DashboardOptions, DashboardService, DashboardState, DashboardView};
pub use error::DashboardError;
pub use metadata::{CategoryMetadata, MetadataTable, StatCardKind};
pub use period::{PeriodComparison, TimeWindow};
pub use projection::{Projector, TableView};
pub use selection::{CategoryFilter, SelectionState};
pub use transaction::{
    PaymentStatus, RawTransaction, TransactionCategory, TransactionRecord, TransactionStore,
};
