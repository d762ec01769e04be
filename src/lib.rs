// ABOUTME: RoutineForge service layer wiring storage collaborators into the planning engine
// ABOUTME: Storage traits, plan/report services, suggestion cache, and logging bootstrap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

#![deny(unsafe_code)]

//! # RoutineForge
//!
//! Deterministic daily-plan generation for a personal routine and health
//! planning app: a synthesized routine timeline, a meal plan with exact
//! calorie distribution, a workout template, the currently active block,
//! and streak/report aggregation over daily logs.
//!
//! This crate is the boundary layer. Persistence and transport are owned by
//! external collaborators reached through the [`storage`] traits; the
//! algorithms live in `routineforge-engine`, and the shared types in
//! `routineforge-core`. Everything is a pure function of the stored
//! documents plus one injected clock reading, so a fixed clock yields
//! byte-identical responses.

/// Logging configuration and structured logging setup
pub mod logging;

/// Plan and report service entry points
pub mod services;

/// Storage collaborator traits and in-memory reference implementations
pub mod storage;

/// Bounded TTL cache for AI-suggestion responses
pub mod suggestion_cache;

// Re-export the foundation and engine crates so callers need one import root.
pub use routineforge_core::{constants, errors, models};
pub use routineforge_engine as engine;

pub use crate::services::{PlanService, ReportsService};
pub use routineforge_core::{AppError, AppResult, ErrorCode};
