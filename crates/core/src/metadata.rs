//! Display metadata for categories and stat cards.
//!
//! The renderer receives colour and icon *tokens*; how they are drawn is its
//! concern. The table is either built in or fully replaced from
//! configuration. Lookups never fall back to empty styling: a category
//! without an entry is an error.

use std::collections::{BTreeMap, HashMap};

use cashbook_shared::MetadataEntry;
use serde::Serialize;
use tracing::warn;

use crate::error::DashboardError;
use crate::transaction::{PaymentStatus, TransactionCategory};

/// Display tokens for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMetadata {
    /// Badge text in the transactions table.
    pub label: String,
    /// Title of the cashbook summary row.
    pub card_title: String,
    /// Badge background colour.
    pub badge_color: String,
    /// Icon name.
    pub icon: String,
    /// Accent colour for amounts on the summary row.
    pub accent: String,
}

impl CategoryMetadata {
    /// Creates metadata from display tokens.
    #[must_use]
    pub fn new(
        label: &str,
        card_title: &str,
        badge_color: &str,
        icon: &str,
        accent: &str,
    ) -> Self {
        Self {
            label: label.to_string(),
            card_title: card_title.to_string(),
            badge_color: badge_color.to_string(),
            icon: icon.to_string(),
            accent: accent.to_string(),
        }
    }
}

/// Closed lookup table from category to display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTable {
    entries: HashMap<TransactionCategory, CategoryMetadata>,
}

impl Default for MetadataTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MetadataTable {
    /// Table covering every category.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = HashMap::from([
            (
                TransactionCategory::Sale,
                CategoryMetadata::new("Sale", "Sales", "#DBEAFE", "trending-up", "#2563EB"),
            ),
            (
                TransactionCategory::Purchase,
                CategoryMetadata::new(
                    "Purchase",
                    "Purchase",
                    "#DCFCE7",
                    "shopping-cart",
                    "#DC2626",
                ),
            ),
            (
                TransactionCategory::Expense,
                CategoryMetadata::new(
                    "Expense",
                    "Expense",
                    "#FEE2E2",
                    "credit-card",
                    "#EA580C",
                ),
            ),
            (
                TransactionCategory::Collection,
                CategoryMetadata::new(
                    "Collection",
                    "Collection Calls",
                    "#FFEDD5",
                    "phone",
                    "#16A34A",
                ),
            ),
        ]);
        Self { entries }
    }

    /// Table built only from configured entries, keyed by category name.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownCategory` if a key names no category.
    pub fn from_overrides(
        overrides: &BTreeMap<String, MetadataEntry>,
    ) -> Result<Self, DashboardError> {
        overrides
            .iter()
            .try_fold(Self::empty(), |table, (key, entry)| {
                let category: TransactionCategory = key.parse()?;
                let metadata = CategoryMetadata::new(
                    &entry.label,
                    &entry.card_title,
                    &entry.badge_color,
                    &entry.icon,
                    &entry.accent,
                );
                Ok(table.with_entry(category, metadata))
            })
    }

    /// Table with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Adds or replaces the entry for `category`.
    #[must_use]
    pub fn with_entry(mut self, category: TransactionCategory, metadata: CategoryMetadata) -> Self {
        self.entries.insert(category, metadata);
        self
    }

    /// Removes the entry for `category`.
    #[must_use]
    pub fn without(mut self, category: TransactionCategory) -> Self {
        self.entries.remove(&category);
        self
    }

    /// Looks up the metadata for `category`.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownCategory` if the table has no entry.
    pub fn metadata_for(
        &self,
        category: TransactionCategory,
    ) -> Result<&CategoryMetadata, DashboardError> {
        self.entries.get(&category).ok_or_else(|| {
            warn!(%category, "No display metadata for category");
            DashboardError::UnknownCategory(category.to_string())
        })
    }

    /// Looks up metadata by category name.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::UnknownCategory` if `key` names no category or
    /// the table has no entry for it.
    pub fn metadata_for_key(&self, key: &str) -> Result<&CategoryMetadata, DashboardError> {
        let category: TransactionCategory = key.parse().inspect_err(|_| {
            warn!(key, "Metadata requested for unknown category key");
        })?;
        self.metadata_for(category)
    }
}

/// The three headline stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatCardKind {
    /// Total of `Sale` transactions.
    Sale,
    /// Total of `Paid` transactions.
    Paid,
    /// Total of `Pending` transactions.
    Pending,
}

/// Where a stat card's figure comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatSource {
    /// A transaction category total.
    Category(TransactionCategory),
    /// A payment status total.
    Status(PaymentStatus),
}

impl StatCardKind {
    /// Cards in display order.
    pub const ALL: [Self; 3] = [Self::Sale, Self::Paid, Self::Pending];

    /// Card title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sale => "Monthly Sale",
            Self::Paid => "Monthly Paid",
            Self::Pending => "Monthly Pending",
        }
    }

    /// Icon name.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Sale => "graph",
            Self::Paid => "wallet",
            Self::Pending => "clock",
        }
    }

    /// Icon background colour.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Sale => "#DCFCE7",
            Self::Paid => "#DBEAFE",
            Self::Pending => "#FFEDD5",
        }
    }

    /// The dimension and key the card aggregates.
    #[must_use]
    pub const fn source(self) -> StatSource {
        match self {
            Self::Sale => StatSource::Category(TransactionCategory::Sale),
            Self::Paid => StatSource::Status(PaymentStatus::Paid),
            Self::Pending => StatSource::Status(PaymentStatus::Pending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_category() {
        let table = MetadataTable::builtin();
        for category in TransactionCategory::ALL {
            let metadata = table.metadata_for(category).unwrap();
            assert_eq!(metadata.label, category.as_str());
        }
    }

    #[test]
    fn test_collection_card_title() {
        let table = MetadataTable::default();
        let metadata = table.metadata_for(TransactionCategory::Collection).unwrap();
        assert_eq!(metadata.card_title, "Collection Calls");
        assert_eq!(metadata.icon, "phone");
    }

    #[test]
    fn test_missing_entry_is_an_error() {
        let table = MetadataTable::builtin().without(TransactionCategory::Sale);
        assert_eq!(
            table.metadata_for(TransactionCategory::Sale),
            Err(DashboardError::UnknownCategory("Sale".into()))
        );
        assert!(table.metadata_for(TransactionCategory::Expense).is_ok());
    }

    #[test]
    fn test_metadata_for_key() {
        let table = MetadataTable::builtin();
        assert_eq!(
            table.metadata_for_key("purchase").unwrap().icon,
            "shopping-cart"
        );
        assert_eq!(
            table.metadata_for_key("Refund"),
            Err(DashboardError::UnknownCategory("Refund".into()))
        );
        assert!(MetadataTable::empty().metadata_for_key("Sale").is_err());
    }

    #[test]
    fn test_with_entry_overrides() {
        let custom = CategoryMetadata::new("Refund", "Refunds", "#000000", "undo", "#FFFFFF");
        let table = MetadataTable::empty().with_entry(TransactionCategory::Sale, custom.clone());
        assert_eq!(table.metadata_for(TransactionCategory::Sale).unwrap(), &custom);
    }

    fn entry(label: &str) -> MetadataEntry {
        MetadataEntry {
            label: label.to_string(),
            card_title: format!("{label} Total"),
            badge_color: "#FFFFFF".to_string(),
            icon: "dot".to_string(),
            accent: "#000000".to_string(),
        }
    }

    #[test]
    fn test_from_overrides_keeps_only_configured_entries() {
        let overrides = BTreeMap::from([
            ("sale".to_string(), entry("Sale")),
            ("Purchase".to_string(), entry("Purchase")),
        ]);
        let table = MetadataTable::from_overrides(&overrides).unwrap();

        assert_eq!(
            table.metadata_for(TransactionCategory::Sale).unwrap().card_title,
            "Sale Total"
        );
        assert!(table.metadata_for(TransactionCategory::Purchase).is_ok());
        assert_eq!(
            table.metadata_for(TransactionCategory::Expense),
            Err(DashboardError::UnknownCategory("Expense".into()))
        );
    }

    #[test]
    fn test_from_overrides_rejects_unknown_key() {
        let overrides = BTreeMap::from([("Refund".to_string(), entry("Refund"))]);
        assert_eq!(
            MetadataTable::from_overrides(&overrides),
            Err(DashboardError::UnknownCategory("Refund".into()))
        );
    }

    #[test]
    fn test_stat_card_sources_keep_dimensions_apart() {
        assert_eq!(
            StatCardKind::Sale.source(),
            StatSource::Category(TransactionCategory::Sale)
        );
        assert_eq!(
            StatCardKind::Pending.source(),
            StatSource::Status(PaymentStatus::Pending)
        );
        assert_eq!(StatCardKind::Paid.title(), "Monthly Paid");
    }
}
