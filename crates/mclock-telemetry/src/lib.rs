//! Telemetry for the market clock service.
//!
//! Owns logging setup so every binary initializes observability the same
//! way.

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
