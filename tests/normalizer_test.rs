// ABOUTME: Totality tests for the profile normalizer over arbitrary JSON shapes
// ABOUTME: Every garbage document resolves to defined enum values, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use routineforge::models::{
    DietPreference, ExperienceLevel, Goal, MealsPerDay, UserProfile, WorkoutLocation,
};
use serde_json::{json, Value};

fn garbage_documents() -> Vec<Value> {
    vec![
        Value::Null,
        json!({}),
        json!([1, 2, 3]),
        json!("just a string"),
        json!(42),
        json!({
            "dietPreference": "",
            "goal": "",
            "experience": "",
            "workoutLocation": "",
            "mealsPerDay": "",
            "workStart": "",
            "workEnd": "",
        }),
        json!({
            "dietPreference": {"nested": "veg"},
            "goal": 3.14,
            "experience": [],
            "workoutLocation": null,
            "mealsPerDay": -1,
            "workoutMinutesPerDay": "NaN",
        }),
        json!({
            "dietPreference": "VEGAN",
            "goal": "FAT_LOSS",
            "experience": "ADVANCED",
            "workoutLocation": "GYM",
        }),
    ]
}

#[test]
fn test_normalizer_never_fails_and_returns_defined_literals() {
    let diets = ["veg", "nonveg", "eggetarian", "vegan"];
    let goals = ["muscle_gain", "weight_gain", "fat_loss", "maintenance"];

    for doc in garbage_documents() {
        let profile = UserProfile::from_json(&doc);
        assert!(diets.contains(&profile.diet_preference.as_str()));
        assert!(goals.contains(&profile.goal.as_str()));
        assert!((3..=5).contains(&profile.meals_per_day.count()));
        assert!(!profile.work_start.is_empty());
        assert!(!profile.work_end.is_empty());
    }
}

#[test]
fn test_normalizer_is_case_insensitive() {
    let doc = json!({
        "dietPreference": "VEGAN",
        "goal": "FAT_LOSS",
        "experience": "ADVANCED",
        "workoutLocation": "GYM",
    });
    let profile = UserProfile::from_json(&doc);
    assert_eq!(profile.diet_preference, DietPreference::Vegan);
    assert_eq!(profile.goal, Goal::FatLoss);
    assert_eq!(profile.experience, ExperienceLevel::Advanced);
    assert_eq!(profile.workout_location, WorkoutLocation::Gym);
}

#[test]
fn test_normalizer_is_idempotent() {
    let doc = json!({
        "dietPreference": "eggetarian",
        "goal": "weight_gain",
        "experience": "intermediate",
        "workoutLocation": "gym",
        "mealsPerDay": "5",
        "workStart": "09:00",
        "workEnd": "18:00",
        "workoutMinutesPerDay": 60,
    });
    let once = UserProfile::from_json(&doc);
    // Re-normalizing the serialized profile changes nothing
    let again = UserProfile::from_json(&serde_json::to_value(&once).unwrap());
    assert_eq!(once, again);
}

#[test]
fn test_documented_fallbacks() {
    let profile = UserProfile::from_json(&Value::Null);
    assert_eq!(profile.diet_preference, DietPreference::Veg);
    assert_eq!(profile.goal, Goal::MuscleGain);
    assert_eq!(profile.experience, ExperienceLevel::Beginner);
    assert_eq!(profile.workout_location, WorkoutLocation::Home);
    assert_eq!(profile.meals_per_day, MealsPerDay::Three);
    assert_eq!(profile.work_start, "10:30");
    assert_eq!(profile.work_end, "20:00");
    assert_eq!(profile.workout_minutes_per_day, 35);
}
