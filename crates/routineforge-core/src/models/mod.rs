// ABOUTME: Core data models for profiles, daily logs, and derived plan responses
// ABOUTME: Module wiring and re-exports for the models family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Core data models

/// Daily log model and lossy document mapping
pub mod daily_log;
/// Normalized user profile and its closed enums
pub mod profile;
/// Derived plan and report response types
pub mod plan;

pub use daily_log::{DailyLog, Mood};
pub use plan::{
    CurrentBlock, MealItem, PlanResponse, ReportSummary, ReportsResponse, RoutineBlock,
    RoutineItem, WorkoutExercise, WorkoutItem,
};
pub use profile::{
    ActivityLevel, DietPreference, ExperienceLevel, Goal, MealsPerDay, UserProfile,
    WorkoutLocation,
};
