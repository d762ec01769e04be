// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the RoutineForge planning engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Constants module
//!
//! This module organizes application constants by domain for better
//! maintainability. Constants are grouped into logical domains rather than
//! being in a single large file.

/// Timezone model
///
/// The whole system runs on one fixed UTC offset. There is no DST handling
/// and no per-user timezone; every "now" and every calendar date is resolved
/// against this offset.
pub mod timezone {
    /// Fixed UTC offset in minutes (IST, UTC+05:30)
    pub const IST_OFFSET_MINUTES: i32 = 330;
}

/// Minute arithmetic bounds
pub mod time {
    /// Minutes in one day
    pub const MINUTES_PER_DAY: i32 = 1440;
}

/// Routine timeline synthesis parameters (all values in minutes)
pub mod schedule {
    /// Wake block starts this long before work start
    pub const WAKE_LEAD: i32 = 150;
    /// Earliest allowed wake start (05:30)
    pub const WAKE_EARLIEST: i32 = 330;
    /// Latest allowed wake start (09:00)
    pub const WAKE_LATEST: i32 = 540;
    /// Wake block duration
    pub const WAKE_DURATION: i32 = 20;

    /// Meditation block duration, immediately after wake
    pub const MEDITATION_DURATION: i32 = 15;

    /// Breakfast starts this long before work start
    pub const BREAKFAST_LEAD: i32 = 75;
    /// Breakfast must end at least this long before work start
    pub const BREAKFAST_GAP_BEFORE_WORK: i32 = 30;
    /// Breakfast block duration
    pub const BREAKFAST_DURATION: i32 = 25;

    /// Earliest allowed lunch start (12:00)
    pub const LUNCH_EARLIEST: i32 = 720;
    /// Latest allowed lunch start (14:30)
    pub const LUNCH_LATEST: i32 = 870;
    /// Lunch break duration
    pub const LUNCH_DURATION: i32 = 45;
    /// Morning work block lasts at least this long
    pub const MIN_MORNING_WORK: i32 = 60;
    /// Morning work block ends this long before lunch
    pub const PRE_LUNCH_BUFFER: i32 = 10;
    /// Afternoon work block starts this long after lunch
    pub const POST_LUNCH_BUFFER: i32 = 10;
    /// Afternoon work block lasts at least this long
    pub const MIN_AFTERNOON_WORK: i32 = 20;

    /// Evening snack duration, immediately after work end
    pub const SNACK_DURATION: i32 = 25;

    /// Workout starts this long after work end
    pub const WORKOUT_GAP_AFTER_WORK: i32 = 30;

    /// Dinner starts this long after workout end
    pub const DINNER_GAP_AFTER_WORKOUT: i32 = 60;
    /// Dinner block duration
    pub const DINNER_DURATION: i32 = 40;

    /// Wind-down starts this long after dinner end
    pub const WIND_DOWN_GAP: i32 = 30;
    /// Wind-down block duration
    pub const WIND_DOWN_DURATION: i32 = 45;

    /// Sleep block starts this long after wind-down end
    pub const SLEEP_GAP: i32 = 30;
    /// Sleep block duration
    pub const SLEEP_DURATION: i32 = 30;
}

/// Daily calorie budgets by goal
pub mod calories {
    /// Daily budget for a fat-loss goal
    pub const FAT_LOSS_DAILY_KCAL: u32 = 1700;
    /// Daily budget for a maintenance goal
    pub const MAINTENANCE_DAILY_KCAL: u32 = 2000;
    /// Daily budget for muscle-gain and weight-gain goals
    pub const SURPLUS_DAILY_KCAL: u32 = 2400;
}

/// Workout duration bounds
pub mod workout {
    /// Default workout duration when the profile carries no usable value
    pub const DEFAULT_MINUTES: i64 = 35;
    /// Minimum workout duration after clamping
    pub const MIN_MINUTES: i64 = 20;
    /// Maximum workout duration after clamping
    pub const MAX_MINUTES: i64 = 90;
}

/// Report window bounds
pub mod reports {
    /// Default lookback window in days
    pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;
    /// Minimum lookback window in days
    pub const MIN_LOOKBACK_DAYS: u32 = 7;
    /// Maximum lookback window in days
    pub const MAX_LOOKBACK_DAYS: u32 = 90;
}

/// Fallback values applied by the profile normalizer
pub mod profile_defaults {
    /// Work start when the profile carries no usable value
    pub const DEFAULT_WORK_START: &str = "10:30";
    /// Work end when the profile carries no usable value
    pub const DEFAULT_WORK_END: &str = "20:00";
}
