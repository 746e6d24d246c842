//! Transaction records, ingestion and the in-memory store.
//!
//! This module provides:
//! - The closed category and payment-status sets
//! - Typed transaction records with exact money amounts
//! - Ingestion of raw display rows
//! - A store that discards stale fetch results

pub mod ingest;
pub mod store;
pub mod types;


pub use ingest::{RawTransaction, ingest, parse_date};
pub use store::{FetchOutcome, FetchSequencer, FetchTicket, StoreState, TransactionStore};
pub use types::{Flow, PaymentStatus, TransactionCategory, TransactionRecord};
