//! Dashboard API types.
//!
//! JSON shapes for the REST snapshot and the WebSocket stream.

use mclock_core::MarketStatus;
use serde::Serialize;

/// All market statuses at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct ClockSnapshot {
    /// When the snapshot was computed (Unix milliseconds).
    pub timestamp_ms: i64,
    /// One status per configured market, in configuration order.
    pub markets: Vec<MarketStatus>,
}

/// Messages pushed over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ClockMessage {
    /// Full snapshot, sent once on connect.
    Snapshot(ClockSnapshot),
    /// Periodic tick from the broadcaster.
    Update(ClockSnapshot),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_tagged_by_type() {
        let msg = ClockMessage::Update(ClockSnapshot {
            timestamp_ms: 1_700_000_000_000,
            markets: Vec::new(),
        });
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "update");
        assert_eq!(json["data"]["timestamp_ms"], 1_700_000_000_000i64);
        assert!(json["data"]["markets"].as_array().unwrap().is_empty());
    }
}
