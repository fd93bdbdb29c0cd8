//! Core domain logic for the market session clock.
//!
//! This crate provides the pure computation the rest of the system renders:
//! - `MarketDefinition`: a venue's local trading window plus timezone
//! - `session_status_at`: open/closed, countdown, and progress at an instant
//! - `format_remaining`: countdown decomposition with injected labels
//! - `TimezoneResolver` / `Clock`: the two injectable capabilities
//!
//! Everything here is synchronous, side-effect free, and bounded-time. The
//! surrounding crates own polling, serving, and configuration.

pub mod clock;
pub mod countdown;
pub mod error;
pub mod market;
pub mod session;
pub mod status;
pub mod tz;

pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown::{format_remaining, CountdownPart, CountdownUnit};
pub use error::{CoreError, Result};
pub use market::{builtin_markets, parse_wall_time, MarketDefinition};
pub use session::{is_trading_day, session_status, session_status_at};
pub use status::MarketStatus;
pub use tz::{
    fallback_offset_minutes, offset_and_weekday, LocalFields, TimezoneResolver,
    TzDatabaseResolver,
};
