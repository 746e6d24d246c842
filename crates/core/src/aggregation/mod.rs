//! Aggregation of transaction records.
//!
//! This module derives every figure the dashboard shows:
//! - Per-category and per-status period totals
//! - Percentage change against a comparison period
//! - Monthly chart series

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::Aggregator;
pub use types::{
    CategorySummary, MonthlyPoint, MonthlySeries, PercentChange, StatusSummary, Trend,
};
