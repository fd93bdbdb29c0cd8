//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] mclock_core::CoreError),

    #[error("Dashboard error: {0}")]
    Dashboard(#[from] mclock_dashboard::DashboardError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] mclock_telemetry::TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
