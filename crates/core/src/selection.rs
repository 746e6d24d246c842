//! Category filter selection.
//!
//! [`SelectionState`] is the only mutable piece of dashboard state. It is
//! owned by the caller and passed explicitly to the projector.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DashboardError;
use crate::transaction::TransactionCategory;

/// Key that selects every category.
pub const ALL_KEY: &str = "All";

/// The active category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only records of this category.
    Only(TransactionCategory),
}

impl CategoryFilter {
    /// Returns true if a record of `category` passes the filter.
    #[must_use]
    pub fn matches(self, category: TransactionCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl From<TransactionCategory> for CategoryFilter {
    fn from(category: TransactionCategory) -> Self {
        Self::Only(category)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_KEY),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_KEY) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Holds the selected category filter. Starts at "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: CategoryFilter,
}

impl SelectionState {
    /// Creates a state with nothing filtered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a filter. Selecting the current filter changes nothing.
    pub fn select(&mut self, filter: impl Into<CategoryFilter>) {
        let filter = filter.into();
        if filter != self.selected {
            debug!(from = %self.selected, to = %filter, "Category filter changed");
            self.selected = filter;
        }
    }

    /// Selects by key: `"All"` or a category name, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownCategory` for any other key; the
    /// selection is left unchanged.
    pub fn select_key(&mut self, key: &str) -> Result<(), DashboardError> {
        let filter: CategoryFilter = key.parse()?;
        self.select(filter);
        Ok(())
    }

    /// Clears the filter; same as selecting "All".
    pub fn clear(&mut self) {
        self.select(CategoryFilter::All);
    }

    /// The selected filter.
    #[must_use]
    pub const fn current(&self) -> CategoryFilter {
        self.selected
    }

    /// Returns true if `category` is the specifically selected one.
    #[must_use]
    pub fn is_active(&self, category: TransactionCategory) -> bool {
        self.selected == CategoryFilter::Only(category)
    }
}
