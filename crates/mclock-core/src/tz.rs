//! Timezone resolution.
//!
//! The calculator needs one thing from a timezone: the local wall-clock
//! fields of a UTC instant. That capability is behind the
//! [`TimezoneResolver`] trait so tests can substitute fixed offsets and so
//! the tz-database backend stays swappable.
//!
//! When a zone identifier cannot be resolved, callers degrade to a static
//! offset table for the four built-in markets rather than failing: the
//! clock must always render a best-effort status.

use crate::error::{CoreError, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use std::str::FromStr;

/// Local wall-clock fields of an instant in some timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub weekday: Weekday,
}

impl LocalFields {
    /// The fields as a naive datetime, `None` if they do not form a valid
    /// calendar date (a resolver that produces such fields is broken, and
    /// callers fall back to the static offset table).
    pub fn as_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
    }
}

/// Maps (instant, IANA identifier) to local wall-clock fields.
pub trait TimezoneResolver: Send + Sync {
    fn resolve(&self, instant: DateTime<Utc>, zone: &str) -> Result<LocalFields>;
}

/// Resolver backed by the embedded IANA timezone database.
///
/// Handles historical and future DST transitions for every zone chrono-tz
/// ships, which covers all four built-in markets.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzDatabaseResolver;

impl TimezoneResolver for TzDatabaseResolver {
    fn resolve(&self, instant: DateTime<Utc>, zone: &str) -> Result<LocalFields> {
        let tz = Tz::from_str(zone).map_err(|_| CoreError::UnknownTimezone(zone.to_string()))?;
        let local = instant.with_timezone(&tz);
        Ok(LocalFields {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
            weekday: local.weekday(),
        })
    }
}

/// Static whole-hour offsets for the built-in markets, in minutes.
///
/// Standard vs. daylight is chosen by a month heuristic (northern DST
/// roughly April through October, southern roughly October through March,
/// Tokyo fixed). Exact DST transition dates are not reproduced, so results
/// within a few days of a transition can be off by one hour. That is an
/// accepted approximation of the degraded path, used only when the zone
/// database cannot resolve the identifier. Unknown zones fall through to
/// UTC.
pub fn fallback_offset_minutes(zone: &str, month: u32) -> i64 {
    let northern_dst = (4..=10).contains(&month);
    let southern_dst = !(4..=9).contains(&month);
    let hours = match zone {
        "Europe/London" => {
            if northern_dst {
                1
            } else {
                0
            }
        }
        "America/New_York" => {
            if northern_dst {
                -4
            } else {
                -5
            }
        }
        "Asia/Tokyo" => 9,
        "Australia/Sydney" => {
            if southern_dst {
                11
            } else {
                10
            }
        }
        _ => 0,
    };
    hours * 60
}

/// Resolve a market's UTC offset (minutes) and local weekday at an instant.
///
/// Infallible: a resolver failure degrades to [`fallback_offset_minutes`],
/// with the local weekday derived by shifting the instant by that offset.
pub fn offset_and_weekday(
    resolver: &dyn TimezoneResolver,
    instant: DateTime<Utc>,
    zone: &str,
) -> (i64, Weekday) {
    // Sub-second part would skew the wall-clock difference below.
    let utc_naive = instant
        .naive_utc()
        .with_nanosecond(0)
        .unwrap_or_else(|| instant.naive_utc());

    if let Ok(fields) = resolver.resolve(instant, zone) {
        if let Some(local_naive) = fields.as_naive() {
            let offset = (local_naive - utc_naive).num_minutes();
            return (offset, fields.weekday);
        }
    }

    let offset = fallback_offset_minutes(zone, instant.month());
    let shifted = instant + Duration::minutes(offset);
    (offset, shifted.weekday())
}
