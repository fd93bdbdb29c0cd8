//! Session-window computation.
//!
//! Answers, for one market and one instant: is the session open, how long
//! until the next open/close transition, and how far through the current
//! window we are. Pure and deterministic for a given (market, instant,
//! resolver) triple; bounded time (the next-open search caps at 7 days).
//!
//! All window math happens in minutes-since-UTC-midnight. Local open/close
//! are shifted into the UTC frame by the market's current offset, wrapping
//! modulo 1440 for sessions that cross UTC midnight. Whether a day counts
//! as a trading day is judged by the market's *local* weekday, never the
//! UTC one.

use crate::market::MarketDefinition;
use crate::status::MarketStatus;
use crate::tz::{offset_and_weekday, TimezoneResolver};
use chrono::{DateTime, Duration, NaiveTime, Timelike, Utc, Weekday};

const MINUTES_PER_DAY: i64 = 24 * 60;
const MS_PER_MINUTE: i64 = 60_000;

/// Progress denominator while closed: a nominal 24-hour window.
const NOMINAL_CLOSED_WINDOW_MS: i64 = MINUTES_PER_DAY * MS_PER_MINUTE;

/// Upper bound on the day-by-day next-open search.
const MAX_SEARCH_DAYS: i64 = 7;

/// Markets trade Monday through Friday in their local calendar.
#[must_use]
pub fn is_trading_day(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Session status at the current system time.
#[must_use]
pub fn session_status(market: &MarketDefinition, resolver: &dyn TimezoneResolver) -> MarketStatus {
    session_status_at(market, Utc::now(), resolver)
}

/// Session status at a given reference instant.
///
/// Never fails: timezone-resolution problems degrade to the static offset
/// table, and arithmetic artifacts are clamped. The open boundary is
/// inclusive and the close boundary exclusive, so exactly one of
/// open/closed holds at every instant.
#[must_use]
pub fn session_status_at(
    market: &MarketDefinition,
    instant: DateTime<Utc>,
    resolver: &dyn TimezoneResolver,
) -> MarketStatus {
    let (offset_minutes, local_weekday) = offset_and_weekday(resolver, instant, &market.timezone);

    let open_utc = to_utc_minutes(market.local_open, offset_minutes);
    let close_utc = to_utc_minutes(market.local_close, offset_minutes);
    let now_utc = i64::from(instant.hour() * 60 + instant.minute());

    let in_window = if open_utc <= close_utc {
        now_utc >= open_utc && now_utc < close_utc
    } else {
        // Session wraps past UTC midnight.
        now_utc >= open_utc || now_utc < close_utc
    };
    let is_open = is_trading_day(local_weekday) && in_window;

    let (remaining_minutes, window_ms) = if is_open {
        let mut to_close = close_utc - now_utc;
        if to_close < 0 {
            to_close += MINUTES_PER_DAY;
        }
        let window = if open_utc <= close_utc {
            close_utc - open_utc
        } else {
            (MINUTES_PER_DAY - open_utc) + close_utc
        };
        (to_close, window * MS_PER_MINUTE)
    } else {
        let days = days_until_next_open(market, instant, resolver, now_utc, open_utc);
        (
            days * MINUTES_PER_DAY + open_utc - now_utc,
            NOMINAL_CLOSED_WINDOW_MS,
        )
    };

    let time_remaining_ms = (remaining_minutes * MS_PER_MINUTE).max(0);
    let progress = if window_ms > 0 {
        (100.0 - (time_remaining_ms as f64 / window_ms as f64) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    MarketStatus {
        market_id: market.id.clone(),
        label: market.label.clone(),
        icon: market.icon.clone(),
        accent: market.accent.clone(),
        local_open: market.open_label(),
        local_close: market.close_label(),
        is_open,
        is_event_opening: !is_open,
        time_remaining_ms,
        progress,
    }
}

/// Shift a local wall-clock time into minutes-since-UTC-midnight.
fn to_utc_minutes(local: NaiveTime, offset_minutes: i64) -> i64 {
    let local_minutes = i64::from(local.hour() * 60 + local.minute());
    (local_minutes - offset_minutes).rem_euclid(MINUTES_PER_DAY)
}

/// Whole days until the next local trading day whose open has not passed.
///
/// Day 0 qualifies only if today's open is still ahead. Weekends (and, once
/// today's open has passed, today itself) each add a full day. Bounded to
/// `MAX_SEARCH_DAYS` iterations; with a Mon–Fri calendar the search always
/// lands within that bound.
fn days_until_next_open(
    market: &MarketDefinition,
    instant: DateTime<Utc>,
    resolver: &dyn TimezoneResolver,
    now_utc: i64,
    open_utc: i64,
) -> i64 {
    for day in 0..=MAX_SEARCH_DAYS {
        let probe = instant + Duration::days(day);
        let (_, weekday) = offset_and_weekday(resolver, probe, &market.timezone);
        if !is_trading_day(weekday) {
            continue;
        }
        if day == 0 && now_utc >= open_utc {
            continue;
        }
        return day;
    }
    MAX_SEARCH_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::builtin_markets;
    use crate::tz::TzDatabaseResolver;
    use chrono::TimeZone;

    fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap()
    }

    fn market(id: &str) -> MarketDefinition {
        builtin_markets()
            .into_iter()
            .find(|m| m.id == id)
            .unwrap()
    }

    const HOUR_MS: i64 = 3_600_000;

    #[test]
    fn london_open_wednesday_morning() {
        // 2026-01-14 is a Wednesday; London is on GMT in January.
        let status = session_status_at(
            &market("london"),
            utc(2026, 1, 14, 9, 0),
            &TzDatabaseResolver,
        );
        assert!(status.is_open);
        assert!(!status.is_event_opening);
        // 09:00 to the 17:00 close is eight hours.
        assert_eq!(status.time_remaining_ms, 8 * HOUR_MS);
    }

    #[test]
    fn tokyo_closed_before_open_across_utc_midnight() {
        // Monday 23:30 UTC is Tuesday 08:30 in Tokyo, half an hour before
        // the 09:00 open.
        let status = session_status_at(
            &market("tokyo"),
            utc(2026, 2, 9, 23, 30),
            &TzDatabaseResolver,
        );
        assert!(!status.is_open);
        assert!(status.is_event_opening);
        assert_eq!(status.time_remaining_ms, 30 * 60_000);
    }

    #[test]
    fn open_boundary_is_inclusive() {
        // London opens 08:00 GMT. At the open minute the full window remains.
        let status = session_status_at(
            &market("london"),
            utc(2026, 1, 14, 8, 0),
            &TzDatabaseResolver,
        );
        assert!(status.is_open);
        assert_eq!(status.time_remaining_ms, 9 * HOUR_MS);
        assert_eq!(status.progress, 0.0);
    }

    #[test]
    fn closed_one_minute_before_open() {
        let status = session_status_at(
            &market("london"),
            utc(2026, 1, 14, 7, 59),
            &TzDatabaseResolver,
        );
        assert!(!status.is_open);
        assert!(status.is_event_opening);
        assert_eq!(status.time_remaining_ms, 60_000);
    }

    #[test]
    fn close_boundary_is_exclusive() {
        // At exactly 17:00 the market has flipped to closed and counts down
        // to the next day's open.
        let status = session_status_at(
            &market("london"),
            utc(2026, 1, 14, 17, 0),
            &TzDatabaseResolver,
        );
        assert!(!status.is_open);
        assert!(status.is_event_opening);
        // 17:00 Wednesday to 08:00 Thursday.
        assert_eq!(status.time_remaining_ms, 15 * HOUR_MS);
    }

    #[test]
    fn saturday_counts_down_to_monday() {
        // 2026-01-17 is a Saturday.
        let status = session_status_at(
            &market("london"),
            utc(2026, 1, 17, 12, 0),
            &TzDatabaseResolver,
        );
        assert!(!status.is_open);
        assert!(status.is_event_opening);
        // Saturday noon to Monday 08:00 is 44 hours.
        assert_eq!(status.time_remaining_ms, 44 * HOUR_MS);
    }

    #[test]
    fn friday_evening_skips_weekend() {
        // Friday 2026-01-16 18:00 UTC, after the London close.
        let status = session_status_at(
            &market("london"),
            utc(2026, 1, 16, 18, 0),
            &TzDatabaseResolver,
        );
        assert!(!status.is_open);
        // Friday 18:00 to Monday 08:00 is 62 hours.
        assert_eq!(status.time_remaining_ms, 62 * HOUR_MS);
    }

    #[test]
    fn sydney_session_wraps_utc_midnight() {
        // Sydney trades 10:00–16:00 AEDT in January, i.e. 23:00–05:00 UTC
        // of the previous UTC day. Monday 00:30 UTC is Monday 11:30 local.
        let status = session_status_at(
            &market("sydney"),
            utc(2026, 1, 12, 0, 30),
            &TzDatabaseResolver,
        );
        assert!(status.is_open);
        // 11:30 to the 16:00 close.
        assert_eq!(status.time_remaining_ms, 270 * 60_000);
    }

    #[test]
    fn sydney_counts_down_to_local_tuesday_open() {
        // Monday 06:00 UTC is Monday 17:00 AEDT, an hour after close. The
        // next open is Tuesday 10:00 local, Monday 23:00 UTC.
        let status = session_status_at(
            &market("sydney"),
            utc(2026, 1, 12, 6, 0),
            &TzDatabaseResolver,
        );
        assert!(!status.is_open);
        assert_eq!(status.time_remaining_ms, 17 * HOUR_MS);
    }

    #[test]
    fn new_york_respects_dst() {
        // 09:30 ET open is 14:30 UTC in winter, 13:30 UTC in summer.
        let winter = session_status_at(
            &market("new-york"),
            utc(2026, 1, 14, 14, 0),
            &TzDatabaseResolver,
        );
        assert!(!winter.is_open);
        assert_eq!(winter.time_remaining_ms, 30 * 60_000);

        let summer = session_status_at(
            &market("new-york"),
            utc(2026, 7, 15, 14, 0),
            &TzDatabaseResolver,
        );
        assert!(summer.is_open);
    }

    #[test]
    fn open_progress_reflects_elapsed_window() {
        // London mid-session: 4.5 of 9 hours elapsed.
        let status = session_status_at(
            &market("london"),
            utc(2026, 1, 14, 12, 30),
            &TzDatabaseResolver,
        );
        assert!(status.is_open);
        assert!((status.progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn weekend_progress_is_clamped() {
        // Remaining exceeds the nominal 24h window early in the weekend;
        // progress clamps to zero rather than going negative.
        let status = session_status_at(
            &market("london"),
            utc(2026, 1, 17, 6, 0),
            &TzDatabaseResolver,
        );
        assert!(!status.is_open);
        assert_eq!(status.progress, 0.0);
    }

    #[test]
    fn trading_day_is_monday_through_friday() {
        assert!(is_trading_day(Weekday::Mon));
        assert!(is_trading_day(Weekday::Fri));
        assert!(!is_trading_day(Weekday::Sat));
        assert!(!is_trading_day(Weekday::Sun));
    }

    #[test]
    fn status_carries_display_metadata_through() {
        let status = session_status_at(
            &market("new-york"),
            utc(2026, 1, 14, 9, 0),
            &TzDatabaseResolver,
        );
        assert_eq!(status.market_id, "new-york");
        assert_eq!(status.label, "New York");
        assert_eq!(status.local_open, "09:30");
        assert_eq!(status.local_close, "16:00");
        assert_eq!(status.accent, "teal");
    }
}
