//! Transaction record types.

use cashbook_shared::{Money, TransactionId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Transaction type. A closed set, independent of [`PaymentStatus`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TransactionCategory {
    /// Product or service sale.
    Sale,
    /// Purchase of stock or supplies.
    Purchase,
    /// Operating expense.
    Expense,
    /// Payment collected from a customer.
    Collection,
}

impl TransactionCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 4] = [Self::Sale, Self::Purchase, Self::Expense, Self::Collection];

    /// Canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "Sale",
            Self::Purchase => "Purchase",
            Self::Expense => "Expense",
            Self::Collection => "Collection",
        }
    }
}

impl std::fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionCategory {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownCategory(s.to_string()))
    }
}

/// Payment status. A closed set, independent of [`TransactionCategory`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PaymentStatus {
    /// Settled.
    Paid,
    /// Awaiting settlement.
    Pending,
}

impl PaymentStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 2] = [Self::Paid, Self::Pending];

    /// Canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownStatus(s.to_string()))
    }
}

/// Direction of a cash movement, from the sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Amount >= 0.
    Inflow,
    /// Amount < 0.
    Outflow,
}

/// A single cashbook transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Stable row identifier.
    pub id: TransactionId,
    /// Calendar date of the transaction.
    pub date: NaiveDate,
    /// Transaction type.
    pub category: TransactionCategory,
    /// Free-text label.
    pub description: String,
    /// Signed amount.
    pub amount: Money,
    /// Payment status.
    pub status: PaymentStatus,
}

impl TransactionRecord {
    /// Creates a record with a fresh ID.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        category: TransactionCategory,
        description: impl Into<String>,
        amount: Money,
        status: PaymentStatus,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            category,
            description: description.into(),
            amount,
            status,
        }
    }

    /// Returns whether money came in or went out.
    #[must_use]
    pub fn flow(&self) -> Flow {
        if self.amount.is_negative() {
            Flow::Outflow
        } else {
            Flow::Inflow
        }
    }
}
