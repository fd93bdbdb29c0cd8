//! Clock state.
//!
//! Holds the market table plus the two injected capabilities (timezone
//! resolver, clock) and recomputes every market's status on demand. Nothing
//! here is mutable after construction; a snapshot is derived from scratch on
//! every call, so the state can be cloned freely into handlers and tasks.

use std::sync::Arc;

use mclock_core::{
    session_status_at, Clock, MarketDefinition, SystemClock, TimezoneResolver, TzDatabaseResolver,
};

use crate::types::ClockSnapshot;

/// Shared, immutable clock state.
#[derive(Clone)]
pub struct ClockState {
    markets: Arc<Vec<MarketDefinition>>,
    resolver: Arc<dyn TimezoneResolver>,
    clock: Arc<dyn Clock>,
}

impl ClockState {
    /// Build state with explicit capabilities.
    pub fn new(
        markets: Vec<MarketDefinition>,
        resolver: Arc<dyn TimezoneResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            markets: Arc::new(markets),
            resolver,
            clock,
        }
    }

    /// Build state backed by the system clock and the embedded tz database.
    pub fn with_system_defaults(markets: Vec<MarketDefinition>) -> Self {
        Self::new(
            markets,
            Arc::new(TzDatabaseResolver),
            Arc::new(SystemClock),
        )
    }

    /// The configured market table.
    pub fn markets(&self) -> &[MarketDefinition] {
        &self.markets
    }

    /// Compute a fresh snapshot of every market at the clock's current
    /// instant.
    pub fn collect_snapshot(&self) -> ClockSnapshot {
        let now = self.clock.now();
        ClockSnapshot {
            timestamp_ms: now.timestamp_millis(),
            markets: self
                .markets
                .iter()
                .map(|market| session_status_at(market, now, self.resolver.as_ref()))
                .collect(),
        }
    }
}
