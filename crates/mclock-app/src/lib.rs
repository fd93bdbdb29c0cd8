//! Market session clock service.
//!
//! Orchestrates the pieces:
//! - market table from configuration (built-in four-exchange default)
//! - dashboard server publishing statuses over REST and WebSocket
//! - one-shot snapshot mode for console use

pub mod app;
pub mod config;
pub mod error;
pub mod labels;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
