// ABOUTME: Engine configuration with defaults drawn from the constants modules
// ABOUTME: Serde-derived nested config structs with environment variable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Engine configuration
//!
//! Defaults come from the constants modules; deployments can override the
//! timezone offset and report window through environment variables. The
//! config is plain data so tests can construct arbitrary variants directly.

use routineforge_core::constants::{reports, timezone};
use serde::{Deserialize, Serialize};
use std::env;

/// Timezone model configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimezoneConfig {
    /// Fixed UTC offset in minutes applied to every clock reading
    pub offset_minutes: i32,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self {
            offset_minutes: timezone::IST_OFFSET_MINUTES,
        }
    }
}

/// Report window configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportsConfig {
    /// Lookback window in days when the caller does not pass one
    pub default_lookback_days: u32,
    /// Smallest accepted lookback window
    pub min_lookback_days: u32,
    /// Largest accepted lookback window
    pub max_lookback_days: u32,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            default_lookback_days: reports::DEFAULT_LOOKBACK_DAYS,
            min_lookback_days: reports::MIN_LOOKBACK_DAYS,
            max_lookback_days: reports::MAX_LOOKBACK_DAYS,
        }
    }
}

impl ReportsConfig {
    /// Clamp a requested lookback window into the accepted range
    ///
    /// `None` resolves to the default window.
    #[must_use]
    pub fn clamp_lookback_days(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_lookback_days)
            .clamp(self.min_lookback_days, self.max_lookback_days)
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Timezone model
    pub timezone: TimezoneConfig,
    /// Report window bounds
    pub reports: ReportsConfig,
}

impl EngineConfig {
    /// Build configuration from environment variables, falling back to the
    /// compiled defaults for anything absent or unparseable
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(offset) = env_i32("ROUTINEFORGE_TZ_OFFSET_MINUTES") {
            config.timezone.offset_minutes = offset;
        }
        if let Some(days) = env_u32("ROUTINEFORGE_REPORTS_DEFAULT_DAYS") {
            config.reports.default_lookback_days =
                days.clamp(config.reports.min_lookback_days, config.reports.max_lookback_days);
        }

        config
    }
}

fn env_i32(key: &str) -> Option<i32> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn env_u32(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.timezone.offset_minutes, 330);
        assert_eq!(config.reports.default_lookback_days, 30);
    }

    #[test]
    fn test_lookback_clamping() {
        let config = ReportsConfig::default();
        assert_eq!(config.clamp_lookback_days(None), 30);
        assert_eq!(config.clamp_lookback_days(Some(3)), 7);
        assert_eq!(config.clamp_lookback_days(Some(365)), 90);
        assert_eq!(config.clamp_lookback_days(Some(45)), 45);
    }
}
