//! Dashboard error types.

use cashbook_shared::{Currency, MoneyError};
use thiserror::Error;

/// Errors raised while ingesting, aggregating or projecting transactions.
///
/// Every variant is recoverable and maps to a displayable error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// Category key outside the closed category set, or a category with no
    /// display metadata.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Payment status outside the closed status set.
    #[error("Unknown payment status: {0}")]
    UnknownStatus(String),

    /// Malformed aggregation window.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Amount string that cannot be parsed losslessly.
    #[error("Malformed amount: {0}")]
    MalformedAmount(#[from] MoneyError),

    /// Date string in no accepted format.
    #[error("Malformed date: {0:?}")]
    MalformedDate(String),

    /// Records denominated in different currencies.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Expected currency.
        expected: Currency,
        /// Actual currency.
        got: Currency,
    },

    /// A total exceeded the representable decimal range.
    #[error("Amount overflow: {0}")]
    AmountOverflow(String),
}

impl DashboardError {
    /// Returns the stable error code shown in the error state.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            Self::UnknownStatus(_) => "UNKNOWN_STATUS",
            Self::InvalidPeriod(_) => "INVALID_PERIOD",
            Self::MalformedAmount(_) => "MALFORMED_AMOUNT",
            Self::MalformedDate(_) => "MALFORMED_DATE",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::AmountOverflow(_) => "AMOUNT_OVERFLOW",
        }
    }
}
