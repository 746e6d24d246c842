//! Ingestion of raw transaction rows.
//!
//! Rows arrive with display strings (`"Dec 28, 2024"`, `"145,000"`) and are
//! converted once into typed [`TransactionRecord`]s. Nothing downstream parses
//! strings again.

use cashbook_shared::{Currency, Money, TransactionId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{PaymentStatus, TransactionCategory, TransactionRecord};
use crate::error::DashboardError;

/// Accepted date formats, tried in order.
const DATE_FORMATS: [&str; 3] = ["%b %d, %Y", "%Y-%m-%d", "%d %b %Y"];

/// A transaction row as supplied by the data-fetching collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Display date, e.g. `"Dec 28, 2024"` or `"2024-12-28"`.
    pub date: String,
    /// Category name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text label.
    pub description: String,
    /// Display amount, e.g. `"145,000"`.
    pub amount: String,
    /// Payment status name.
    pub status: String,
}

/// Parses a display date.
///
/// # Errors
///
/// Returns `DashboardError::MalformedDate` if no accepted format matches.
pub fn parse_date(input: &str) -> Result<NaiveDate, DashboardError> {
    let trimmed = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| DashboardError::MalformedDate(input.to_string()))
}

impl RawTransaction {
    /// Converts the row into a typed record denominated in `currency`.
    ///
    /// # Errors
    ///
    /// Returns the first field error: date, category, amount, then status.
    pub fn into_record(self, currency: Currency) -> Result<TransactionRecord, DashboardError> {
        let date = parse_date(&self.date)?;
        let category: TransactionCategory = self.kind.parse()?;
        let amount = Money::parse(&self.amount, currency)?;
        let status: PaymentStatus = self.status.parse()?;

        Ok(TransactionRecord {
            id: TransactionId::new(),
            date,
            category,
            description: self.description,
            amount,
            status,
        })
    }
}

/// Converts a batch of rows, preserving their order.
///
/// # Errors
///
/// Fails on the first malformed row; no partial batch is returned.
pub fn ingest(
    rows: Vec<RawTransaction>,
    currency: Currency,
) -> Result<Vec<TransactionRecord>, DashboardError> {
    rows.into_iter()
        .map(|row| row.into_record(currency))
        .collect()
}
