//! Derived market status.

use serde::{Deserialize, Serialize};

/// Snapshot of a market's session state at one instant.
///
/// Recomputed from scratch on every tick; carries no identity across ticks.
/// Display fields (`label`, `icon`, `accent`, local open/close) are passed
/// through from the definition so the dashboard needs no second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatus {
    /// Market identifier.
    pub market_id: String,
    /// Display name.
    pub label: String,
    /// Display icon.
    pub icon: String,
    /// Display accent token.
    pub accent: String,
    /// Local open as `"HH:MM"`.
    pub local_open: String,
    /// Local close as `"HH:MM"`.
    pub local_close: String,
    /// Whether the session is currently open.
    pub is_open: bool,
    /// Whether the next transition is an opening (market currently closed).
    pub is_event_opening: bool,
    /// Milliseconds until the next transition. Never negative.
    pub time_remaining_ms: i64,
    /// Percentage elapsed through the current window, in [0, 100].
    /// Open markets measure against the session window; closed markets
    /// against a nominal 24-hour window.
    pub progress: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_flat_json() {
        let status = MarketStatus {
            market_id: "london".to_string(),
            label: "London".to_string(),
            icon: String::new(),
            accent: "blue".to_string(),
            local_open: "08:00".to_string(),
            local_close: "17:00".to_string(),
            is_open: true,
            is_event_opening: false,
            time_remaining_ms: 28_800_000,
            progress: 11.0,
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["market_id"], "london");
        assert_eq!(json["is_open"], true);
        assert_eq!(json["time_remaining_ms"], 28_800_000);
        assert_eq!(json["local_close"], "17:00");
    }
}
