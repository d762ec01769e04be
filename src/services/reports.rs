// ABOUTME: The "get reports" service: bounded log window plus summary statistics
// ABOUTME: Clamps the requested lookback window and aggregates streak/averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

use super::normalize_email;
use routineforge_core::models::ReportsResponse;
use routineforge_core::{AppError, AppResult};
use routineforge_engine::clock::{FixedClock, SharedClock};
use routineforge_engine::streak::summarize_logs;
use routineforge_engine::time_utils::today_in_tz;
use routineforge_engine::EngineConfig;
use std::sync::Arc;
use tracing::debug;

use crate::storage::LogStore;

/// Builds the trend report for a user
pub struct ReportsService {
    logs: Arc<dyn LogStore>,
    clock: SharedClock,
    config: EngineConfig,
}

impl ReportsService {
    /// Wire the service to its collaborators
    #[must_use]
    pub fn new(logs: Arc<dyn LogStore>, clock: SharedClock, config: EngineConfig) -> Self {
        Self {
            logs,
            clock,
            config,
        }
    }

    /// Fetch the bounded log window and its summary statistics
    ///
    /// `days` is clamped into the configured [min, max] lookback range;
    /// `None` uses the default window. Users with no logs get an empty
    /// window and a zeroed summary, not an error.
    ///
    /// # Errors
    ///
    /// `AppError::invalid_input` when the email is empty after trimming, or
    /// storage errors surfaced by the log collaborator.
    pub async fn get_reports(
        &self,
        email: &str,
        days: Option<u32>,
    ) -> AppResult<ReportsResponse> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::invalid_input("Missing email"));
        }

        let window = self.config.reports.clamp_lookback_days(days);
        let logs = self.logs.recent_logs(&email, window as usize).await?;

        let at = FixedClock::new(self.clock.now_utc());
        let today = today_in_tz(&at, self.config.timezone.offset_minutes);
        let summary = summarize_logs(&logs, &today);

        debug!(
            user = %email,
            window,
            days_logged = summary.days_logged,
            streak = summary.current_streak,
            "report summarized"
        );

        Ok(ReportsResponse { logs, summary })
    }
}
