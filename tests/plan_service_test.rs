// ABOUTME: Integration tests for the plan service entry point
// ABOUTME: Profile-missing signal, reference-day plan content, determinism, email normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use routineforge::engine::clock::FixedClock;
use routineforge::engine::EngineConfig;
use routineforge::models::DailyLog;
use routineforge::storage::memory::{InMemoryLogStore, InMemoryProfileStore};
use routineforge::PlanService;
use serde_json::json;
use std::sync::Arc;

/// 2026-08-06 05:30 UTC = 2026-08-06 11:00 IST
fn late_morning_service(
    profiles: Arc<InMemoryProfileStore>,
    logs: Arc<InMemoryLogStore>,
) -> PlanService {
    let instant = Utc.with_ymd_and_hms(2026, 8, 6, 5, 30, 0).unwrap();
    PlanService::new(
        profiles,
        logs,
        Arc::new(FixedClock::new(instant)),
        EngineConfig::default(),
    )
}

fn log_for(date: &str) -> DailyLog {
    DailyLog::from_json(&json!({
        "userEmail": "user@example.com",
        "date": date,
        "workoutDone": true,
        "mealsFollowedPct": 80,
    }))
}

#[tokio::test]
async fn test_missing_profile_is_a_distinct_signal() {
    let service = late_morning_service(
        Arc::new(InMemoryProfileStore::new()),
        Arc::new(InMemoryLogStore::new()),
    );

    let err = service.get_today_plan("ghost@example.com").await.unwrap_err();
    assert!(err.is_profile_missing());
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn test_empty_email_is_invalid_input() {
    let service = late_morning_service(
        Arc::new(InMemoryProfileStore::new()),
        Arc::new(InMemoryLogStore::new()),
    );

    let err = service.get_today_plan("   ").await.unwrap_err();
    assert!(!err.is_profile_missing());
    assert_eq!(err.http_status(), 400);
}

#[tokio::test]
async fn test_reference_day_plan() {
    let profiles = Arc::new(InMemoryProfileStore::new());
    profiles
        .upsert(
            "user@example.com",
            json!({
                "userEmail": "user@example.com",
                "workStart": "10:30",
                "workEnd": "20:00",
                "dietPreference": "nonveg",
                "goal": "fat_loss",
                "experience": "beginner",
                "workoutLocation": "home",
                "workoutMinutesPerDay": "35",
                "mealsPerDay": "4",
            }),
        )
        .unwrap();

    let logs = Arc::new(InMemoryLogStore::new());
    for date in ["2026-08-06", "2026-08-05", "2026-08-04"] {
        logs.upsert(log_for(date)).unwrap();
    }

    let service = late_morning_service(profiles, logs);
    let plan = service.get_today_plan("  User@Example.COM ").await.unwrap();

    assert_eq!(plan.user_email, "user@example.com");
    assert_eq!(plan.greeting_name, "user");
    assert_eq!(plan.greeting, "Good morning");
    assert_eq!(plan.streak_days, 3);

    // 11:00 IST falls inside the morning work block
    assert_eq!(plan.current_block.title, "Morning Work Block");

    let workout_block = plan
        .routine_blocks
        .iter()
        .find(|b| b.title == "Evening Workout")
        .unwrap();
    assert_eq!(workout_block.start, "20:30");
    assert_eq!(workout_block.end, "21:05");
    let dinner = plan
        .routine_blocks
        .iter()
        .find(|b| b.title == "Dinner")
        .unwrap();
    assert_eq!(dinner.start, "22:05");

    let kcals: Vec<u32> = plan.meals.iter().map(|m| m.kcal).collect();
    assert_eq!(kcals, vec![425, 595, 255, 425]);
    assert_eq!(kcals.iter().sum::<u32>(), 1700);

    assert_eq!(plan.workout.title, "Home Workout");
    assert_eq!(plan.workout.duration_min, 35);

    // Dashboard list mirrors the timeline
    assert_eq!(plan.routine.len(), plan.routine_blocks.len());
    assert_eq!(plan.routine[0].title, plan.routine_blocks[0].title);
}

#[tokio::test]
async fn test_plan_is_deterministic_for_a_fixed_clock() {
    let profiles = Arc::new(InMemoryProfileStore::new());
    profiles
        .upsert("user@example.com", json!({ "goal": "maintenance" }))
        .unwrap();
    let logs = Arc::new(InMemoryLogStore::new());
    logs.upsert(log_for("2026-08-06")).unwrap();

    let service = late_morning_service(profiles, logs);
    let first = service.get_today_plan("user@example.com").await.unwrap();
    let second = service.get_today_plan("user@example.com").await.unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_defaulted_profile_still_produces_a_full_plan() {
    let profiles = Arc::new(InMemoryProfileStore::new());
    profiles
        .upsert("user@example.com", json!({ "mealsPerDay": ["bogus"] }))
        .unwrap();

    let service = late_morning_service(profiles, Arc::new(InMemoryLogStore::new()));
    let plan = service.get_today_plan("user@example.com").await.unwrap();

    assert_eq!(plan.meals.len(), 3);
    assert_eq!(plan.streak_days, 0);
    assert!(!plan.routine_blocks.is_empty());
    assert_eq!(plan.workout.duration_min, 35);
}
