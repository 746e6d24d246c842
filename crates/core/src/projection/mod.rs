//! Projection of records and aggregates into render-ready views.

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::Projector;
pub use types::{EMPTY_TABLE_MESSAGE, SummaryRow, TableView, TransactionRow};
