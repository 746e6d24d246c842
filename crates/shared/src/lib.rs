//! Shared types and configuration for Cashbook.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision, parsing and display formatting
//! - Typed IDs for type-safe entity references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::{AppConfig, DashboardConfig, LoggingConfig, MetadataEntry};
pub use types::{Currency, Grouping, Money, MoneyError, TransactionId};
