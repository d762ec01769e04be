// ABOUTME: Injectable clock abstraction for deterministic plan generation
// ABOUTME: SystemClock reads the host clock; FixedClock pins an instant for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Clock injection
//!
//! Every timezone-dependent operation in the engine takes its "now" from a
//! [`Clock`] rather than reading the system clock directly. Request handlers
//! read the clock once at the start of handling and thread the same instant
//! through, so one response never mixes two different nows.

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// The current instant in UTC
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Thread-safe shared clock handle
pub type SharedClock = Arc<dyn Clock>;

/// Production clock backed by the host system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock pinned to a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock that always reports the given instant
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_is_stable() {
        let instant = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now_utc(), clock.now_utc());
        assert_eq!(clock.now_utc(), instant);
    }
}
