//! In-memory transaction store with stale-fetch protection.
//!
//! The store distinguishes "not loaded yet" from "loaded, possibly empty".
//! Fetch results are accepted only for the most recently issued
//! [`FetchTicket`]; older results are discarded.

use cashbook_shared::Currency;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::TransactionRecord;
use crate::error::DashboardError;

/// Sequence number of a fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FetchTicket(u64);

impl FetchTicket {
    /// Returns the sequence number.
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing fetch tickets.
#[derive(Debug, Clone, Default)]
pub struct FetchSequencer {
    latest: u64,
}

impl FetchSequencer {
    /// Creates a sequencer that has issued nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket, superseding all earlier ones.
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    /// Returns true if `ticket` is the most recently issued one.
    #[must_use]
    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        self.latest != 0 && ticket.0 == self.latest
    }
}

/// Result of handing a fetch response to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The records replaced the store contents.
    Applied,
    /// A newer fetch was issued; the records were discarded.
    Stale,
}

/// Load state of the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreState {
    /// No fetch has completed.
    #[default]
    NotLoaded,
    /// Records from the latest completed fetch, in supplier order.
    Loaded(Vec<TransactionRecord>),
}

/// Ordered, read-only record set for one currency.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    currency: Currency,
    sequencer: FetchSequencer,
    state: StoreState,
}

impl TransactionStore {
    /// Creates an empty, not-yet-loaded store.
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            sequencer: FetchSequencer::new(),
            state: StoreState::NotLoaded,
        }
    }

    /// Creates a store already loaded with `records`.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::CurrencyMismatch` if any record is not in
    /// `currency`.
    pub fn with_records(
        currency: Currency,
        records: Vec<TransactionRecord>,
    ) -> Result<Self, DashboardError> {
        let mut store = Self::new(currency);
        let ticket = store.begin_fetch();
        store.complete_fetch(ticket, records)?;
        Ok(store)
    }

    /// Currency of every record in the store.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Current load state.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// Returns true once a fetch has been applied.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self.state, StoreState::Loaded(_))
    }

    /// Loaded records, or `None` before the first applied fetch.
    #[must_use]
    pub fn records(&self) -> Option<&[TransactionRecord]> {
        match &self.state {
            StoreState::NotLoaded => None,
            StoreState::Loaded(records) => Some(records),
        }
    }

    /// Loaded records, treating "not loaded" as empty.
    #[must_use]
    pub fn records_or_empty(&self) -> &[TransactionRecord] {
        self.records().unwrap_or(&[])
    }

    /// Starts a fetch; any in-flight fetch becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        let ticket = self.sequencer.issue();
        debug!(sequence = ticket.sequence(), "Transaction fetch issued");
        ticket
    }

    /// Completes a fetch.
    ///
    /// Stale tickets are discarded without validation and leave the store
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::CurrencyMismatch` if a record of the latest
    /// fetch is in another currency; the store is left unchanged.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        records: Vec<TransactionRecord>,
    ) -> Result<FetchOutcome, DashboardError> {
        if !self.sequencer.is_latest(ticket) {
            debug!(
                sequence = ticket.sequence(),
                discarded = records.len(),
                "Discarding stale transaction fetch"
            );
            return Ok(FetchOutcome::Stale);
        }

        if let Some(record) = records.iter().find(|r| r.amount.currency != self.currency) {
            return Err(DashboardError::CurrencyMismatch {
                expected: self.currency,
                got: record.amount.currency,
            });
        }

        debug!(
            sequence = ticket.sequence(),
            records = records.len(),
            "Transaction fetch applied"
        );
        self.state = StoreState::Loaded(records);
        Ok(FetchOutcome::Applied)
    }
}
