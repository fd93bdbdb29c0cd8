//! Main application orchestration.
//!
//! Wires the configured market table into shared clock state, spawns the
//! dashboard server, and waits for shutdown. The one-shot path computes a
//! single snapshot and logs it, for cron jobs and smoke checks.

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::labels::english_short_label;
use mclock_core::format_remaining;
use mclock_dashboard::ClockState;
use tracing::{error, info, warn};

/// Main application.
pub struct Application {
    config: AppConfig,
    state: ClockState,
}

impl Application {
    /// Create a new application from validated configuration.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let markets = config.resolve_markets()?;
        info!(
            market_count = markets.len(),
            markets = ?markets.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            "Loaded market table"
        );
        let state = ClockState::with_system_defaults(markets);
        Ok(Self { config, state })
    }

    /// Run the service until ctrl-c.
    pub async fn run(&self) -> AppResult<()> {
        if self.config.dashboard.enabled {
            let state = self.state.clone();
            let dashboard_config = self.config.dashboard.clone();
            tokio::spawn(async move {
                if let Err(e) = mclock_dashboard::run_server(state, dashboard_config).await {
                    error!(error = %e, "Dashboard server failed");
                }
            });
        } else {
            warn!("Dashboard disabled; running headless");
        }

        tokio::signal::ctrl_c().await?;
        info!("Shutdown requested");
        Ok(())
    }

    /// Compute one snapshot, log it, and return.
    pub fn run_once(&self) {
        let snapshot = self.state.collect_snapshot();
        for status in &snapshot.markets {
            let countdown = format_remaining(status.time_remaining_ms, english_short_label)
                .into_iter()
                .map(|p| format!("{} {}", p.value, p.unit))
                .collect::<Vec<_>>()
                .join(" ");
            let event = if status.is_event_opening {
                "opens in"
            } else {
                "closes in"
            };
            info!(
                market = %status.market_id,
                is_open = status.is_open,
                "{} {} {}",
                status.label,
                event,
                countdown
            );
        }
    }
}
