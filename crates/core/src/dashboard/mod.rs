//! Dashboard assembly.
//!
//! This module provides:
//! - Headline stat cards (monthly sale, paid and pending)
//! - The cashbook summary list and overview chart
//! - The displayable error state

pub mod service;
pub mod types;


pub use service::{DashboardOptions, DashboardService};
pub use types::{CHART_TITLE, ChartView, DashboardState, DashboardView, ErrorView, StatCard};
