//! Market definitions.
//!
//! A market is a trading venue with a local open/close window and an IANA
//! timezone. The built-in table covers the four exchanges the clock ships
//! with; deployments can replace it from configuration.

use crate::error::{CoreError, Result};
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Static description of a trading venue.
///
/// Open and close are wall-clock times in the market's local timezone,
/// minute precision. `icon` and `accent` are display metadata passed through
/// to the dashboard untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDefinition {
    /// Stable identifier (e.g. "london").
    pub id: String,
    /// Display name.
    pub label: String,
    /// Local session open, wall clock.
    pub local_open: NaiveTime,
    /// Local session close, wall clock.
    pub local_close: NaiveTime,
    /// IANA timezone identifier (e.g. "Europe/London").
    pub timezone: String,
    /// Display icon.
    pub icon: String,
    /// Display accent token.
    pub accent: String,
}

impl MarketDefinition {
    /// Build a definition from `"HH:MM"` open/close strings.
    ///
    /// Fails on malformed times. The built-in table and config loading both
    /// go through here, so a bad wall-time string never reaches the
    /// calculator.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        local_open: &str,
        local_close: &str,
        timezone: impl Into<String>,
        icon: impl Into<String>,
        accent: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            label: label.into(),
            local_open: parse_wall_time(local_open)?,
            local_close: parse_wall_time(local_close)?,
            timezone: timezone.into(),
            icon: icon.into(),
            accent: accent.into(),
        })
    }

    /// Local open rendered back as `"HH:MM"`.
    pub fn open_label(&self) -> String {
        self.local_open.format("%H:%M").to_string()
    }

    /// Local close rendered back as `"HH:MM"`.
    pub fn close_label(&self) -> String {
        self.local_close.format("%H:%M").to_string()
    }
}

/// Parse a `"HH:MM"` wall-clock string.
pub fn parse_wall_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| CoreError::InvalidTime(s.to_string()))
}

/// The four built-in exchanges.
static BUILTIN_MARKETS: Lazy<Vec<MarketDefinition>> = Lazy::new(|| {
    vec![
        MarketDefinition::new(
            "london",
            "London",
            "08:00",
            "17:00",
            "Europe/London",
            "\u{1F1EC}\u{1F1E7}",
            "blue",
        )
        .expect("built-in market table is well-formed"),
        MarketDefinition::new(
            "new-york",
            "New York",
            "09:30",
            "16:00",
            "America/New_York",
            "\u{1F1FA}\u{1F1F8}",
            "teal",
        )
        .expect("built-in market table is well-formed"),
        MarketDefinition::new(
            "tokyo",
            "Tokyo",
            "09:00",
            "15:00",
            "Asia/Tokyo",
            "\u{1F1EF}\u{1F1F5}",
            "red",
        )
        .expect("built-in market table is well-formed"),
        MarketDefinition::new(
            "sydney",
            "Sydney",
            "10:00",
            "16:00",
            "Australia/Sydney",
            "\u{1F1E6}\u{1F1FA}",
            "orange",
        )
        .expect("built-in market table is well-formed"),
    ]
});

/// Clone of the built-in market table.
pub fn builtin_markets() -> Vec<MarketDefinition> {
    BUILTIN_MARKETS.clone()
}
