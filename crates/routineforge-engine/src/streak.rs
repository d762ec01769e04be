// ABOUTME: Consecutive-day streak scanning and report summary statistics
// ABOUTME: Walks backward from today over a sparse date set; aggregates a bounded log window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Streak and summary aggregation
//!
//! The streak is strict: it starts at today and walks backward one calendar
//! day at a time while a log exists. A user who logged yesterday but not yet
//! today has a streak of 0 until tonight's log lands.

use crate::time_utils::previous_date;
use routineforge_core::models::{DailyLog, ReportSummary};
use std::collections::HashSet;

/// Count consecutive logged days ending at `today`
///
/// Returns 0 when today has no log. The scan also stops if a date in the
/// chain fails to parse (corrupt dates cannot extend a streak).
#[must_use]
pub fn compute_streak(log_dates: &HashSet<String>, today: &str) -> u32 {
    let mut streak = 0;
    let mut day = today.to_owned();
    while log_dates.contains(&day) {
        streak += 1;
        match previous_date(&day) {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Aggregate statistics over a bounded newest-first log window
///
/// Averages over nullable metrics consider only the logged values and report
/// `None` when a metric was never logged; the latest weight is the first one
/// found scanning newest-first.
#[must_use]
pub fn summarize_logs(logs: &[DailyLog], today: &str) -> ReportSummary {
    if logs.is_empty() {
        return ReportSummary::default();
    }

    let days_logged = logs.len() as u32;
    let workouts_done = logs.iter().filter(|l| l.workout_done).count() as u32;

    let meals_sum: u64 = logs.iter().map(|l| u64::from(l.meals_followed_pct)).sum();
    let avg_meals_pct = ((meals_sum as f64) / f64::from(days_logged)).round() as u32;

    let avg_sleep = mean_one_decimal(logs.iter().filter_map(|l| l.sleep_hours));
    let avg_water = mean_one_decimal(logs.iter().filter_map(|l| l.water_liters));
    let latest_weight = logs.iter().find_map(|l| l.weight_kg);

    let log_dates: HashSet<String> = logs.iter().map(|l| l.date.clone()).collect();
    let current_streak = compute_streak(&log_dates, today);

    ReportSummary {
        days_logged,
        current_streak,
        workouts_done,
        avg_meals_pct,
        avg_sleep,
        avg_water,
        latest_weight,
    }
}

/// Mean over present values, rounded to one decimal; `None` for an empty set
fn mean_one_decimal(values: impl Iterator<Item = f64>) -> Option<f64> {
    let collected: Vec<f64> = values.collect();
    if collected.is_empty() {
        return None;
    }
    let mean = collected.iter().sum::<f64>() / collected.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}
