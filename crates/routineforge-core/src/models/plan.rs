// ABOUTME: Derived plan and report response types for the engine boundary
// ABOUTME: RoutineBlock, MealItem, WorkoutItem, PlanResponse, ReportsResponse and friends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Plan and report response models
//!
//! Everything here is derived and ephemeral: recomputed per request from the
//! profile document, the log window, and a single clock reading. Wire field
//! names keep the original app's camelCase JSON so existing dashboard
//! clients keep working.

use super::daily_log::DailyLog;
use serde::{Deserialize, Serialize};

/// One named interval in the synthesized daily timeline
///
/// `start`/`end` are wrapped `HH:MM` wall-clock labels. Within one timeline
/// blocks appear in generation order; a block whose computed end does not
/// come after its start is never emitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutineBlock {
    /// Block start, wrapped `HH:MM`
    pub start: String,
    /// Block end, wrapped `HH:MM`
    pub end: String,
    /// Display emoji
    pub icon: String,
    /// Block title
    pub title: String,
    /// Short guidance lines shown under the block
    pub bullets: Vec<String>,
}

/// Condensed timeline entry for the dashboard list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutineItem {
    /// Start time, wrapped `HH:MM`
    pub time: String,
    /// Block title
    pub title: String,
    /// Display emoji
    pub icon: String,
}

/// One meal slot with its calorie share
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealItem {
    /// Slot name (Breakfast, Lunch, ...)
    pub name: String,
    /// Template description keyed by diet and goal
    pub desc: String,
    /// Calorie share for this slot
    pub kcal: u32,
}

/// One exercise within the workout template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    /// Exercise name
    pub name: String,
    /// Sets and reps label, e.g. `3 × 12`
    pub sets_reps: String,
}

/// The single daily workout template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutItem {
    /// `Home Workout` or `Gym Workout`
    pub title: String,
    /// Focus + experience label, e.g. `Fat loss focus • Beginner`
    pub subtitle: String,
    /// Duration in minutes, always within [20, 90]
    pub duration_min: u32,
    /// Ordered exercise list
    pub items: Vec<WorkoutExercise>,
}

/// The timeline entry active (or next up) at the resolved wall-clock minute
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentBlock {
    /// Block title
    pub title: String,
    /// Range label, `"HH:MM - HH:MM"`
    pub time: String,
}

/// Response to a "get today's plan" query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// Normalized user email the plan was generated for
    pub user_email: String,
    /// Display name derived from the email local part
    pub greeting_name: String,
    /// Time-of-day greeting in the fixed timezone
    pub greeting: String,
    /// Active or upcoming timeline entry
    pub current_block: CurrentBlock,
    /// Consecutive logged days ending today
    pub streak_days: u32,
    /// Condensed timeline for the dashboard
    pub routine: Vec<RoutineItem>,
    /// Meal slots with calorie distribution
    pub meals: Vec<MealItem>,
    /// Workout template
    pub workout: WorkoutItem,
    /// Full synthesized timeline
    pub routine_blocks: Vec<RoutineBlock>,
}

/// Aggregate statistics over the report window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Number of days with a log in the window
    pub days_logged: u32,
    /// Consecutive logged days ending today
    pub current_streak: u32,
    /// Days in the window with the workout marked done
    pub workouts_done: u32,
    /// Mean meals-followed percentage, rounded
    pub avg_meals_pct: u32,
    /// Mean sleep hours over logged values, one decimal; `None` when never logged
    pub avg_sleep: Option<f64>,
    /// Mean water liters over logged values, one decimal; `None` when never logged
    pub avg_water: Option<f64>,
    /// Most recent logged weight, newest-first scan; `None` when never logged
    pub latest_weight: Option<f64>,
}

impl Default for ReportSummary {
    fn default() -> Self {
        Self {
            days_logged: 0,
            current_streak: 0,
            workouts_done: 0,
            avg_meals_pct: 0,
            avg_sleep: None,
            avg_water: None,
            latest_weight: None,
        }
    }
}

/// Response to a "get reports" query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportsResponse {
    /// The bounded log window, newest first
    pub logs: Vec<DailyLog>,
    /// Aggregate statistics over the window
    pub summary: ReportSummary,
}
