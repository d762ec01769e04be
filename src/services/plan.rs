// ABOUTME: The "get today's plan" service: profile to timeline, meals, workout, current block
// ABOUTME: Surfaces the distinct profile-missing signal so callers can route to onboarding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

use super::{greeting_for_hour, normalize_email};
use routineforge_core::models::{PlanResponse, UserProfile};
use routineforge_core::{AppError, AppResult};
use routineforge_engine::clock::{FixedClock, SharedClock};
use routineforge_engine::meal_planner::plan_meals;
use routineforge_engine::streak::compute_streak;
use routineforge_engine::time_utils::{now_hour_in_tz, now_minutes_in_tz, today_in_tz};
use routineforge_engine::timeline::{
    build_timeline, resolve_current_block, routine_items, TimelineParams,
};
use routineforge_engine::workout_builder::plan_workout;
use routineforge_engine::EngineConfig;
use std::sync::Arc;
use tracing::{debug, info};

use crate::storage::{LogStore, ProfileStore};

/// Builds the full daily plan for a user
///
/// Stateless between requests: every call loads the profile and log window
/// fresh and derives the plan from them plus a single clock reading.
pub struct PlanService {
    profiles: Arc<dyn ProfileStore>,
    logs: Arc<dyn LogStore>,
    clock: SharedClock,
    config: EngineConfig,
}

impl PlanService {
    /// Wire the service to its collaborators
    #[must_use]
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        logs: Arc<dyn LogStore>,
        clock: SharedClock,
        config: EngineConfig,
    ) -> Self {
        Self {
            profiles,
            logs,
            clock,
            config,
        }
    }

    /// Generate today's plan for the given user
    ///
    /// # Errors
    ///
    /// - [`AppError::profile_missing`] when no profile document exists for
    ///   the user (the caller routes to onboarding)
    /// - `AppError::invalid_input` when the email is empty after trimming
    /// - storage errors surfaced by the collaborators
    pub async fn get_today_plan(&self, email: &str) -> AppResult<PlanResponse> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::invalid_input("Missing email"));
        }

        let doc = self
            .profiles
            .find_profile(&email)
            .await?
            .ok_or_else(|| AppError::profile_missing(email.clone()))?;
        let profile = UserProfile::from_json(&doc);

        // One clock reading per request; every derived time shares it.
        let at = FixedClock::new(self.clock.now_utc());
        let offset = self.config.timezone.offset_minutes;
        let now_minutes = now_minutes_in_tz(&at, offset);
        let today = today_in_tz(&at, offset);

        let params = TimelineParams::from_profile(&profile);
        let routine_blocks = build_timeline(&params);
        let current_block = resolve_current_block(&routine_blocks, now_minutes);
        let routine = routine_items(&routine_blocks);

        let meal_plan = plan_meals(profile.diet_preference, profile.goal, profile.meals_per_day);
        let workout = plan_workout(
            profile.goal,
            profile.experience,
            profile.workout_location,
            profile.workout_minutes_per_day,
        );

        let window = self.config.reports.max_lookback_days as usize;
        let logged_dates = self.logs.logged_dates(&email, window).await?;
        let streak_days = compute_streak(&logged_dates, &today);

        debug!(
            blocks = routine_blocks.len(),
            meals = meal_plan.meals.len(),
            streak_days,
            "derived daily plan"
        );
        info!(user = %email, "plan generated");

        let greeting_name = email.split('@').next().unwrap_or(&email).to_owned();
        Ok(PlanResponse {
            user_email: email,
            greeting_name,
            greeting: greeting_for_hour(now_hour_in_tz(&at, offset)).to_owned(),
            current_block,
            streak_days,
            routine,
            meals: meal_plan.meals,
            workout,
            routine_blocks,
        })
    }
}
