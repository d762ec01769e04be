// ABOUTME: Minute-of-day arithmetic and fixed-offset calendar helpers
// ABOUTME: Lossy HH:MM parsing, wrap-to-day formatting, saturating clamps, now/today in a fixed timezone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Time arithmetic
//!
//! All schedule math runs on minutes-since-midnight integers. Parsing is
//! deliberately lossy: `"25:99"` yields a large minute value rather than an
//! error, and callers clamp before display. Formatting always wraps into
//! `[0, 1440)` so any minute value is representable as a wall-clock label.

use crate::clock::Clock;
use chrono::{Duration, NaiveDate, Timelike};
use routineforge_core::constants::time::MINUTES_PER_DAY;

/// Parse `HH:MM` into minutes since midnight
///
/// No range validation: each segment parses lossily (fallback 0), so
/// malformed input silently produces an out-of-day value. Callers that
/// display derived values clamp or wrap first.
#[must_use]
pub fn minutes_from_hhmm(time: &str) -> i32 {
    let mut parts = time.splitn(2, ':');
    let hours = parts.next().map_or(0, lossy_int);
    let minutes = parts.next().map_or(0, lossy_int);
    hours * 60 + minutes
}

/// Format minutes since midnight as a wrapped `HH:MM` label
///
/// The input is wrapped into `[0, 1440)` first, so negative and past-midnight
/// values (from overnight-shift arithmetic) always render as a valid
/// wall-clock time.
#[must_use]
pub fn hhmm_from_minutes(minutes: i32) -> String {
    let wrapped = wrap_minute_of_day(minutes);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Wrap an arbitrary minute value into `[0, 1440)`
#[must_use]
pub const fn wrap_minute_of_day(minutes: i32) -> i32 {
    ((minutes % MINUTES_PER_DAY) + MINUTES_PER_DAY) % MINUTES_PER_DAY
}

/// Saturating clamp over minute values
///
/// Composed as `max(lo, min(hi, n))`. When the window is inverted
/// (`lo > hi`, which the breakfast window can produce for very early work
/// starts) the lower bound wins; `Ord::clamp` would panic there.
#[must_use]
pub const fn clamp_minutes(n: i32, lo: i32, hi: i32) -> i32 {
    let upper = if n < hi { n } else { hi };
    if upper > lo {
        upper
    } else {
        lo
    }
}

/// Current minute of day in a fixed-offset timezone, wrapped into `[0, 1440)`
#[must_use]
pub fn now_minutes_in_tz(clock: &dyn Clock, offset_minutes: i32) -> i32 {
    let now = clock.now_utc();
    let utc_minutes = (now.hour() * 60 + now.minute()) as i32;
    wrap_minute_of_day(utc_minutes + offset_minutes)
}

/// Current hour of day (0-23) in a fixed-offset timezone
#[must_use]
pub fn now_hour_in_tz(clock: &dyn Clock, offset_minutes: i32) -> u32 {
    (now_minutes_in_tz(clock, offset_minutes) / 60) as u32
}

/// Today's calendar date in a fixed-offset timezone, `YYYY-MM-DD`
#[must_use]
pub fn today_in_tz(clock: &dyn Clock, offset_minutes: i32) -> String {
    let shifted = clock.now_utc() + Duration::minutes(i64::from(offset_minutes));
    shifted.format("%Y-%m-%d").to_string()
}

/// The calendar day before the given `YYYY-MM-DD` date
///
/// `None` when the input does not parse as a date (streak scans simply stop
/// there).
#[must_use]
pub fn previous_date(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.pred_opt())
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Lossy integer segment parse; anything unparseable reads as 0
fn lossy_int(segment: &str) -> i32 {
    segment.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parse_and_format_round_trip() {
        assert_eq!(minutes_from_hhmm("10:30"), 630);
        assert_eq!(minutes_from_hhmm("00:00"), 0);
        assert_eq!(hhmm_from_minutes(630), "10:30");
    }

    #[test]
    fn test_parse_is_lossy_not_validating() {
        assert_eq!(minutes_from_hhmm("25:99"), 1599);
        assert_eq!(minutes_from_hhmm("garbage"), 0);
        assert_eq!(minutes_from_hhmm("7"), 420);
    }

    #[test]
    fn test_format_wraps_out_of_day_values() {
        assert_eq!(hhmm_from_minutes(1470), "00:30");
        assert_eq!(hhmm_from_minutes(-30), "23:30");
        assert_eq!(hhmm_from_minutes(2880), "00:00");
    }

    #[test]
    fn test_clamp_inverted_window_prefers_lower_bound() {
        assert_eq!(clamp_minutes(285, 365, 330), 365);
        assert_eq!(clamp_minutes(50, 20, 90), 50);
        assert_eq!(clamp_minutes(-10, 20, 90), 20);
        assert_eq!(clamp_minutes(500, 20, 90), 90);
    }

    #[test]
    fn test_fixed_offset_now_and_today() {
        // 2026-08-06 20:00 UTC = 2026-08-07 01:30 IST
        let instant = Utc.with_ymd_and_hms(2026, 8, 6, 20, 0, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(now_minutes_in_tz(&clock, 330), 90);
        assert_eq!(today_in_tz(&clock, 330), "2026-08-07");
    }

    #[test]
    fn test_previous_date_handles_month_boundaries() {
        assert_eq!(previous_date("2026-03-01").as_deref(), Some("2026-02-28"));
        assert_eq!(previous_date("2024-03-01").as_deref(), Some("2024-02-29"));
        assert_eq!(previous_date("not-a-date"), None);
    }
}
