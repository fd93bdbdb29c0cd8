//! Periodic status broadcasting.
//!
//! The broadcaster is the system's poller: on a fixed interval it recomputes
//! every market's status, logs open/close transitions, and fans the snapshot
//! out to all connected WebSocket clients.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, info, trace};

use crate::state::ClockState;
use crate::types::ClockMessage;

/// Run the broadcaster task.
///
/// Never returns; cancelled by dropping the task. A tick with no connected
/// receivers is normal and ignored.
pub async fn run_broadcaster(state: ClockState, tx: broadcast::Sender<String>, interval_ms: u64) {
    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));

    // Previous tick's open flags, for transition logging.
    let mut last_open: HashMap<String, bool> = HashMap::new();

    loop {
        interval.tick().await;

        let snapshot = state.collect_snapshot();

        for status in &snapshot.markets {
            if let Some(&was_open) = last_open.get(&status.market_id) {
                if was_open != status.is_open {
                    if status.is_open {
                        info!(market = %status.market_id, "Market opened");
                    } else {
                        info!(market = %status.market_id, "Market closed");
                    }
                }
            }
            last_open.insert(status.market_id.clone(), status.is_open);
        }

        let msg = ClockMessage::Update(snapshot);
        match serde_json::to_string(&msg) {
            Ok(json) => match tx.send(json) {
                Ok(n) => trace!(receivers = n, "Broadcast update sent"),
                Err(_) => trace!("No WebSocket receivers connected"),
            },
            Err(e) => debug!(error = %e, "Failed to serialize clock update"),
        }
    }
}
