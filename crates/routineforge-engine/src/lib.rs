// ABOUTME: Plan-generation and streak-computation engine for RoutineForge
// ABOUTME: Pure, clock-injected algorithms over normalized profile and log data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

#![deny(unsafe_code)]

//! # RoutineForge Engine
//!
//! The computation core of the platform: given a normalized profile, a log
//! window, and one clock reading, it deterministically derives the daily
//! routine timeline, the meal plan, the workout template, the currently
//! active block, and streak/report statistics.
//!
//! Every operation here is a pure function of its explicit inputs plus an
//! injected [`clock::Clock`]; for a fixed clock the serialized output is
//! byte-identical across invocations.

/// Injectable clock abstraction (`SystemClock`, `FixedClock`)
pub mod clock;

/// Engine configuration with environment overrides
pub mod config;

/// Meal slot templates and calorie distribution
pub mod meal_planner;

/// Streak scanning and report summary statistics
pub mod streak;

/// Minute-of-day arithmetic and fixed-offset calendar helpers
pub mod time_utils;

/// Routine timeline synthesis and current-block resolution
pub mod timeline;

/// Workout template selection
pub mod workout_builder;

pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use config::EngineConfig;
