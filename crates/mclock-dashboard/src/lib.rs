//! mclock-dashboard - Live market session dashboard.
//!
//! Serves the computed market statuses three ways:
//!
//! - `GET /` - static HTML page
//! - `GET /api/snapshot` - current statuses as JSON
//! - `GET /ws` - WebSocket pushing a fresh snapshot every tick
//!
//! The tick comes from the broadcaster task, which recomputes every
//! market's status on a fixed interval (1 s by default), logs open/close
//! transitions, and fans the update out over a broadcast channel. The
//! computation itself lives in `mclock-core`; this crate only polls and
//! publishes.
//!
//! # Usage
//!
//! ```ignore
//! use mclock_dashboard::{ClockState, DashboardConfig, run_server};
//!
//! let state = ClockState::with_system_defaults(mclock_core::builtin_markets());
//! let config = DashboardConfig::default();
//! tokio::spawn(async move {
//!     if let Err(e) = run_server(state, config).await {
//!         tracing::error!(error = %e, "Dashboard server failed");
//!     }
//! });
//! ```

mod broadcast;
mod config;
mod error;
mod server;
mod state;
mod types;

pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use server::run_server;
pub use state::ClockState;
pub use types::{ClockMessage, ClockSnapshot};
