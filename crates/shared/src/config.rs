//! Application configuration management.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::types::{Currency, Grouping};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dashboard configuration.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Currency every ingested amount is denominated in.
    #[serde(default)]
    pub currency: Currency,
    /// Digit grouping for full amounts.
    #[serde(default)]
    pub grouping: Grouping,
    /// IANA timezone used to decide what "today" is.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Fixed reference date; overrides the clock when set.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// Number of trailing months shown in the overview chart.
    #[serde(default = "default_chart_months")]
    pub chart_months: u32,
    /// Path of the JSON transaction fixture.
    #[serde(default = "default_fixture_path")]
    pub fixture_path: String,
    /// Initial category filter ("All" or a category name).
    #[serde(default = "default_selected_category")]
    pub selected_category: String,
    /// Category display metadata keyed by category name. When set, it
    /// replaces the built-in table and categories left out have no metadata.
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, MetadataEntry>>,
}

/// Display tokens for one category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetadataEntry {
    /// Badge text in the transactions table.
    pub label: String,
    /// Title of the cashbook summary row.
    pub card_title: String,
    /// Badge background colour.
    pub badge_color: String,
    /// Icon name.
    pub icon: String,
    /// Accent colour for amounts.
    pub accent: String,
}

fn default_timezone() -> String {
    "Asia/Kolkata".to_string()
}

fn default_chart_months() -> u32 {
    6
}

fn default_fixture_path() -> String {
    "fixtures/transactions.json".to_string()
}

fn default_selected_category() -> String {
    "All".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            grouping: Grouping::default(),
            timezone: default_timezone(),
            as_of: None,
            chart_months: default_chart_months(),
            fixture_path: default_fixture_path(),
            selected_category: default_selected_category(),
            metadata: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "cashbook=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl DashboardConfig {
    /// Parses the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a known IANA timezone.
    pub fn timezone(&self) -> Result<Tz, config::ConfigError> {
        self.timezone.parse::<Tz>().map_err(|e| {
            config::ConfigError::Message(format!("invalid timezone {:?}: {e}", self.timezone))
        })
    }

    /// Returns the reference date: `as_of` when set, otherwise the current
    /// date in the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone is invalid.
    pub fn today(&self) -> Result<NaiveDate, config::ConfigError> {
        if let Some(as_of) = self.as_of {
            return Ok(as_of);
        }
        let tz = self.timezone()?;
        Ok(Utc::now().with_timezone(&tz).date_naive())
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CASHBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
