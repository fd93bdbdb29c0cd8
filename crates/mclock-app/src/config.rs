//! Application configuration.

use crate::error::{AppError, AppResult};
use mclock_core::{builtin_markets, MarketDefinition};
use mclock_dashboard::DashboardConfig;
use serde::{Deserialize, Serialize};

/// One market entry as written in the config file.
///
/// Open and close are `"HH:MM"` wall-clock strings in the market's local
/// timezone; they are validated when lowered into a `MarketDefinition`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketEntry {
    /// Stable identifier (e.g. "london").
    pub id: String,
    /// Display name.
    pub label: String,
    /// Local session open, `"HH:MM"`.
    pub open: String,
    /// Local session close, `"HH:MM"`.
    pub close: String,
    /// IANA timezone identifier.
    pub timezone: String,
    /// Display icon.
    #[serde(default)]
    pub icon: String,
    /// Display accent token.
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_accent() -> String {
    "slate".to_string()
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Market table. Empty means the built-in four-exchange table.
    #[serde(default)]
    pub markets: Vec<MarketEntry>,
    /// Dashboard server settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Lower the configured entries into market definitions.
    ///
    /// Falls back to the built-in table when no markets are configured.
    /// Fails fast on malformed wall-clock strings so a bad entry never
    /// reaches the calculator.
    pub fn resolve_markets(&self) -> AppResult<Vec<MarketDefinition>> {
        if self.markets.is_empty() {
            return Ok(builtin_markets());
        }

        self.markets
            .iter()
            .map(|entry| {
                MarketDefinition::new(
                    entry.id.clone(),
                    entry.label.clone(),
                    &entry.open,
                    &entry.close,
                    entry.timezone.clone(),
                    entry.icon.clone(),
                    entry.accent.clone(),
                )
                .map_err(|e| AppError::Config(format!("Market {:?}: {e}", entry.id)))
            })
            .collect()
    }
}
