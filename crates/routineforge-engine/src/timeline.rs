// ABOUTME: Routine timeline synthesis and current-block resolution
// ABOUTME: Builds the ordered daily block sequence from work hours and resolves the active block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Routine timeline
//!
//! The timeline builder synthesizes a full day of named blocks around the
//! user's work hours: wake, meditation, breakfast, the work blocks split
//! around a clamped lunch window, an evening snack, the workout, dinner,
//! wind-down, and sleep.
//!
//! Two policies govern edge cases:
//!
//! - An overnight shift (`workEnd < workStart`) extends the work end past
//!   midnight; emitted labels wrap back into wall-clock time.
//! - Any block whose computed end does not come after its start is dropped
//!   rather than emitted. Degenerate schedules therefore produce a shorter
//!   timeline, never an inverted interval, and callers must not assume a
//!   fixed block count.

use crate::time_utils::{clamp_minutes, hhmm_from_minutes, minutes_from_hhmm};
use routineforge_core::constants::{schedule, time::MINUTES_PER_DAY, workout};
use routineforge_core::models::{CurrentBlock, RoutineBlock, RoutineItem, UserProfile};
use tracing::debug;

/// Inputs for timeline synthesis, in minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineParams {
    /// Work start minute
    pub work_start: i32,
    /// Work end minute (same-day value; overnight shifts are detected here)
    pub work_end: i32,
    /// Requested workout minutes (clamped during synthesis)
    pub workout_minutes: i64,
    /// Vegetarian-style meal bullets
    pub veg_style: bool,
    /// Fat-loss lunch bullets
    pub fat_loss: bool,
}

impl TimelineParams {
    /// Derive synthesis inputs from a normalized profile
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            work_start: minutes_from_hhmm(&profile.work_start),
            work_end: minutes_from_hhmm(&profile.work_end),
            workout_minutes: profile.workout_minutes_per_day,
            veg_style: profile.diet_preference.is_veg_style(),
            fat_loss: profile.goal.is_fat_loss(),
        }
    }
}

/// Synthesize the ordered daily timeline
///
/// Blocks are produced in a fixed generation order; degenerate intervals are
/// dropped. At least the wake block always survives, so the result is never
/// empty.
#[must_use]
pub fn build_timeline(params: &TimelineParams) -> Vec<RoutineBlock> {
    let work_start = params.work_start;
    let mut work_end = params.work_end;
    if work_end < work_start {
        // Overnight shift: extend past midnight, wrap at emission
        work_end += MINUTES_PER_DAY;
    }

    let lunch_start = clamp_minutes(
        (work_start + work_end) / 2,
        schedule::LUNCH_EARLIEST,
        schedule::LUNCH_LATEST,
    );
    let lunch_end = lunch_start + schedule::LUNCH_DURATION;

    let wake_start = clamp_minutes(
        work_start - schedule::WAKE_LEAD,
        schedule::WAKE_EARLIEST,
        schedule::WAKE_LATEST,
    );
    let wake_end = wake_start + schedule::WAKE_DURATION;
    let meditation_end = wake_end + schedule::MEDITATION_DURATION;

    let breakfast_start = clamp_minutes(
        work_start - schedule::BREAKFAST_LEAD,
        meditation_end,
        work_start - schedule::BREAKFAST_GAP_BEFORE_WORK,
    );
    let breakfast_end = breakfast_start + schedule::BREAKFAST_DURATION;

    let duration = clamp_workout_minutes(params.workout_minutes);

    let mut blocks = Vec::with_capacity(11);

    push_block(
        &mut blocks,
        wake_start,
        wake_end,
        "☀️",
        "Wake Up & Morning Routine",
        vec![
            "Wake up".to_owned(),
            "Drink water".to_owned(),
            "Light stretching".to_owned(),
        ],
    );
    push_block(
        &mut blocks,
        wake_end,
        meditation_end,
        "🧘",
        "Morning Meditation",
        vec![
            "10 min meditation".to_owned(),
            "Deep breathing".to_owned(),
            "Set daily intentions".to_owned(),
        ],
    );
    push_block(
        &mut blocks,
        breakfast_start,
        breakfast_end,
        "☕",
        "Breakfast",
        vec![
            if params.veg_style {
                "Oats / poha / upma + protein".to_owned()
            } else {
                "Eggs + oats / fruit".to_owned()
            },
            "Vitamins (optional)".to_owned(),
            "Plan the day".to_owned(),
        ],
    );

    // Early work starts can drag the clamped lunch window to or before the
    // work start; the day then keeps a single unsplit work block instead of
    // an inverted afternoon interval.
    if lunch_start > work_start {
        push_block(
            &mut blocks,
            work_start,
            (work_start + schedule::MIN_MORNING_WORK).max(lunch_start - schedule::PRE_LUNCH_BUFFER),
            "💼",
            "Morning Work Block",
            vec![
                "Focus work".to_owned(),
                "Deep work tasks".to_owned(),
                "Avoid distractions".to_owned(),
            ],
        );
        push_block(
            &mut blocks,
            lunch_start,
            lunch_end,
            "🍽️",
            "Lunch Break",
            vec![
                if params.fat_loss {
                    "Light healthy lunch".to_owned()
                } else {
                    "Balanced lunch".to_owned()
                },
                "Short walk".to_owned(),
                "Rest & recharge".to_owned(),
            ],
        );
        push_block(
            &mut blocks,
            (lunch_end + schedule::POST_LUNCH_BUFFER).min(work_end - schedule::MIN_AFTERNOON_WORK),
            work_end,
            "🧳",
            "Afternoon Work Block",
            vec![
                "Meetings".to_owned(),
                "Collaboration".to_owned(),
                "Task completion".to_owned(),
            ],
        );
    } else {
        push_block(
            &mut blocks,
            work_start,
            work_end,
            "💼",
            "Work Block",
            vec![
                "Focus work".to_owned(),
                "Short breaks".to_owned(),
                "Stay hydrated".to_owned(),
            ],
        );
    }

    push_block(
        &mut blocks,
        work_end,
        work_end + schedule::SNACK_DURATION,
        "🍵",
        "Evening Snack",
        vec![
            "Light snack".to_owned(),
            "Hydrate".to_owned(),
            "Prepare for workout".to_owned(),
        ],
    );

    let workout_start = work_end + schedule::WORKOUT_GAP_AFTER_WORK;
    let workout_end = workout_start + duration;
    push_block(
        &mut blocks,
        workout_start,
        workout_end,
        "🏋️",
        "Evening Workout",
        vec![
            format!("{duration} min workout"),
            "Stretch".to_owned(),
            "Cool down".to_owned(),
        ],
    );

    let dinner_start = workout_end + schedule::DINNER_GAP_AFTER_WORKOUT;
    let dinner_end = dinner_start + schedule::DINNER_DURATION;
    push_block(
        &mut blocks,
        dinner_start,
        dinner_end,
        "🍲",
        "Dinner",
        vec![
            if params.veg_style {
                "Dal + roti + veggies".to_owned()
            } else {
                "Lean protein + veggies".to_owned()
            },
            "Light conversation".to_owned(),
            "Avoid heavy food late".to_owned(),
        ],
    );

    let wind_down_start = dinner_end + schedule::WIND_DOWN_GAP;
    let wind_down_end = wind_down_start + schedule::WIND_DOWN_DURATION;
    push_block(
        &mut blocks,
        wind_down_start,
        wind_down_end,
        "📖",
        "Wind Down",
        vec![
            "Reading".to_owned(),
            "Relaxation".to_owned(),
            "Screen-free time".to_owned(),
        ],
    );

    let sleep_start = wind_down_end + schedule::SLEEP_GAP;
    push_block(
        &mut blocks,
        sleep_start,
        sleep_start + schedule::SLEEP_DURATION,
        "🛏️",
        "Sleep",
        vec![
            "7-8 hours sleep".to_owned(),
            "Dark room".to_owned(),
            "Comfortable temperature".to_owned(),
        ],
    );

    blocks
}

/// Clamp a requested workout duration into the allowed range
#[must_use]
pub fn clamp_workout_minutes(requested: i64) -> i32 {
    requested.clamp(workout::MIN_MINUTES, workout::MAX_MINUTES) as i32
}

/// Condense the timeline into dashboard entries, one per block
#[must_use]
pub fn routine_items(blocks: &[RoutineBlock]) -> Vec<RoutineItem> {
    blocks
        .iter()
        .map(|b| RoutineItem {
            time: b.start.clone(),
            title: b.title.clone(),
            icon: b.icon.clone(),
        })
        .collect()
}

/// Resolve the block active at `now_minutes`, or the nearest upcoming one,
/// or the last block of the day
///
/// Total for any non-empty block list: scanning in generation order, the
/// first block covering `now` wins (a block whose end label precedes its
/// start label wraps midnight and matches on either side); otherwise the
/// block with the smallest start after `now`; otherwise the block with the
/// latest start.
#[must_use]
pub fn resolve_current_block(blocks: &[RoutineBlock], now_minutes: i32) -> CurrentBlock {
    for block in blocks {
        let start = minutes_from_hhmm(&block.start);
        let end = minutes_from_hhmm(&block.end);
        let active = if end < start {
            now_minutes >= start || now_minutes < end
        } else {
            now_minutes >= start && now_minutes < end
        };
        if active {
            return label(block);
        }
    }

    let upcoming = blocks
        .iter()
        .filter(|b| minutes_from_hhmm(&b.start) > now_minutes)
        .min_by_key(|b| minutes_from_hhmm(&b.start));
    if let Some(block) = upcoming {
        return label(block);
    }

    blocks
        .iter()
        .max_by_key(|b| minutes_from_hhmm(&b.start))
        .map_or_else(
            || CurrentBlock {
                title: "Start your day".to_owned(),
                time: "07:00".to_owned(),
            },
            label,
        )
}

fn label(block: &RoutineBlock) -> CurrentBlock {
    CurrentBlock {
        title: block.title.clone(),
        time: format!("{} - {}", block.start, block.end),
    }
}

/// Emit a block unless its interval is degenerate
fn push_block(
    blocks: &mut Vec<RoutineBlock>,
    start: i32,
    end: i32,
    icon: &str,
    title: &str,
    bullets: Vec<String>,
) {
    if end <= start {
        debug!(title, start, end, "dropping degenerate timeline block");
        return;
    }
    blocks.push(RoutineBlock {
        start: hhmm_from_minutes(start),
        end: hhmm_from_minutes(end),
        icon: icon.to_owned(),
        title: title.to_owned(),
        bullets,
    });
}
