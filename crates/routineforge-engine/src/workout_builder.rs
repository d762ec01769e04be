// ABOUTME: Workout template selection keyed by goal, experience, and location
// ABOUTME: Two fixed exercise templates with experience-scaled push-up volume and clamped duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Workout building
//!
//! One workout template per day. The exercise list is one of two fixed
//! four-item templates selected by whether the goal is fat loss; only the
//! push-up volume scales with experience. The requested duration is clamped
//! into [20, 90] minutes no matter what the profile carries.

use crate::timeline::clamp_workout_minutes;
use routineforge_core::models::{
    ExperienceLevel, Goal, WorkoutExercise, WorkoutItem, WorkoutLocation,
};

/// Build the daily workout template
#[must_use]
pub fn plan_workout(
    goal: Goal,
    experience: ExperienceLevel,
    location: WorkoutLocation,
    requested_minutes: i64,
) -> WorkoutItem {
    let duration_min = clamp_workout_minutes(requested_minutes) as u32;

    let push_ups = WorkoutExercise {
        name: "Push-ups".to_owned(),
        sets_reps: if experience == ExperienceLevel::Beginner {
            "3 × 8".to_owned()
        } else {
            "3 × 12".to_owned()
        },
    };

    let items = if goal.is_fat_loss() {
        vec![
            exercise("Jumping jacks", "3 × 45s"),
            exercise("Bodyweight squats", "3 × 12"),
            push_ups,
            exercise("Plank", "3 × 45s"),
        ]
    } else {
        vec![
            push_ups,
            exercise("Rows (band/dumbbell)", "3 × 10"),
            exercise("Squats", "3 × 12"),
            exercise("Overhead press", "3 × 10"),
        ]
    };

    let title = match location {
        WorkoutLocation::Gym => "Gym Workout",
        WorkoutLocation::Home => "Home Workout",
    };
    let focus = if goal.is_fat_loss() {
        "Fat loss focus"
    } else {
        "Strength focus"
    };

    WorkoutItem {
        title: title.to_owned(),
        subtitle: format!("{focus} • {}", experience.label()),
        duration_min,
        items,
    }
}

fn exercise(name: &str, sets_reps: &str) -> WorkoutExercise {
    WorkoutExercise {
        name: name.to_owned(),
        sets_reps: sets_reps.to_owned(),
    }
}
