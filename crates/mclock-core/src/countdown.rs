//! Countdown formatting.
//!
//! Turns a millisecond duration into ordered, zero-padded display parts.
//! Unit labels come from an injected lookup so the formatter stays decoupled
//! from whatever localization mechanism the caller uses; the count is passed
//! alongside the unit key for singular/plural selection.

use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;

/// Unit key handed to the label lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountdownUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl fmt::Display for CountdownUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days => write!(f, "days"),
            Self::Hours => write!(f, "hours"),
            Self::Minutes => write!(f, "minutes"),
            Self::Seconds => write!(f, "seconds"),
        }
    }
}

/// One display segment of a countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownPart {
    /// Zero-padded two-digit count.
    pub value: String,
    /// Localized unit label.
    pub unit: String,
}

/// Decompose a duration into labeled day/hour/minute/second parts.
///
/// Truncating decomposition. The days part appears only when days > 0;
/// hours and minutes always appear; seconds are suppressed on multi-day
/// countdowns. Order is fixed: days, hours, minutes, seconds.
pub fn format_remaining<F>(duration_ms: i64, labels: F) -> Vec<CountdownPart>
where
    F: Fn(CountdownUnit, u64) -> String,
{
    let total_seconds = duration_ms.max(0) as u64 / 1000;
    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / 60;
    let seconds = total_seconds % 60;

    let part = |unit: CountdownUnit, count: u64| CountdownPart {
        value: format!("{count:02}"),
        unit: labels(unit, count),
    };

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(part(CountdownUnit::Days, days));
    }
    parts.push(part(CountdownUnit::Hours, hours));
    parts.push(part(CountdownUnit::Minutes, minutes));
    if days == 0 {
        parts.push(part(CountdownUnit::Seconds, seconds));
    }
    parts
}
