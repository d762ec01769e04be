// ABOUTME: Integration tests for the reports service entry point
// ABOUTME: Summary statistics over mixed-null logs, window clamping, and the empty case
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use routineforge::engine::clock::FixedClock;
use routineforge::engine::EngineConfig;
use routineforge::models::DailyLog;
use routineforge::storage::memory::InMemoryLogStore;
use routineforge::ReportsService;
use serde_json::json;
use std::sync::Arc;

/// 2026-08-06 12:00 UTC = 2026-08-06 17:30 IST
fn service(logs: Arc<InMemoryLogStore>) -> ReportsService {
    let instant = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    ReportsService::new(
        logs,
        Arc::new(FixedClock::new(instant)),
        EngineConfig::default(),
    )
}

#[tokio::test]
async fn test_empty_window_yields_zeroed_summary() {
    let reports = service(Arc::new(InMemoryLogStore::new()))
        .get_reports("user@example.com", None)
        .await
        .unwrap();

    assert!(reports.logs.is_empty());
    assert_eq!(reports.summary.days_logged, 0);
    assert_eq!(reports.summary.current_streak, 0);
    assert_eq!(reports.summary.avg_meals_pct, 0);
    assert_eq!(reports.summary.avg_sleep, None);
    assert_eq!(reports.summary.latest_weight, None);
}

#[tokio::test]
async fn test_summary_over_mixed_null_logs() {
    let logs = Arc::new(InMemoryLogStore::new());
    logs.upsert(DailyLog::from_json(&json!({
        "userEmail": "user@example.com",
        "date": "2026-08-06",
        "weightKg": 71.0,
        "sleepHours": 7.0,
        "waterLiters": 2.0,
        "workoutDone": true,
        "mealsFollowedPct": 100,
    })))
    .unwrap();
    logs.upsert(DailyLog::from_json(&json!({
        "userEmail": "user@example.com",
        "date": "2026-08-05",
        "sleepHours": 8.0,
        "workoutDone": false,
        "mealsFollowedPct": 50,
    })))
    .unwrap();
    logs.upsert(DailyLog::from_json(&json!({
        "userEmail": "user@example.com",
        "date": "2026-08-03",
        "weightKg": 70.0,
        "waterLiters": 3.0,
        "workoutDone": true,
        "mealsFollowedPct": 0,
    })))
    .unwrap();

    let reports = service(logs).get_reports("user@example.com", None).await.unwrap();
    let summary = &reports.summary;

    assert_eq!(summary.days_logged, 3);
    assert_eq!(summary.workouts_done, 2);
    assert_eq!(summary.avg_meals_pct, 50);
    assert_eq!(summary.avg_sleep, Some(7.5));
    assert_eq!(summary.avg_water, Some(2.5));
    // Newest-first scan: the 2026-08-06 weight wins
    assert_eq!(summary.latest_weight, Some(71.0));
    // Logs exist for today and yesterday but not 08-04: streak is 2
    assert_eq!(summary.current_streak, 2);

    // Window is newest-first
    let dates: Vec<&str> = reports.logs.iter().map(|l| l.date.as_str()).collect();
    assert_eq!(dates, vec!["2026-08-06", "2026-08-05", "2026-08-03"]);
}

#[tokio::test]
async fn test_window_clamps_to_configured_bounds() {
    let logs = Arc::new(InMemoryLogStore::new());
    // 10 consecutive days ending today
    let mut date = "2026-08-06".to_owned();
    for _ in 0..10 {
        logs.upsert(DailyLog::from_json(&json!({
            "userEmail": "user@example.com",
            "date": date,
            "mealsFollowedPct": 100,
        })))
        .unwrap();
        date = routineforge::engine::time_utils::previous_date(&date).unwrap();
    }

    let service = service(logs);

    // Requested 3 clamps up to the 7-day minimum
    let narrow = service.get_reports("user@example.com", Some(3)).await.unwrap();
    assert_eq!(narrow.logs.len(), 7);

    // Requested 10_000 clamps down to the 90-day maximum, which all 10 fit in
    let wide = service
        .get_reports("user@example.com", Some(10_000))
        .await
        .unwrap();
    assert_eq!(wide.logs.len(), 10);
    assert_eq!(wide.summary.current_streak, 10);
}
