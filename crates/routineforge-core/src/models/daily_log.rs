// ABOUTME: Daily log model with lossy mapping from raw persisted documents
// ABOUTME: One log per (userEmail, date) pair; metrics are nullable and clamped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mood rating on a closed 1-5 scale
///
/// Serialized as its numeric value; out-of-scale numbers degrade to
/// [`Mood::Neutral`] rather than erroring.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "u8", into = "u8")]
pub enum Mood {
    /// Rough day
    VeryLow,
    /// Below average
    Low,
    /// Average
    #[default]
    Neutral,
    /// Above average
    Good,
    /// Great day
    Great,
}

impl Mood {
    /// Numeric value on the 1-5 scale
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        match self {
            Self::VeryLow => 1,
            Self::Low => 2,
            Self::Neutral => 3,
            Self::Good => 4,
            Self::Great => 5,
        }
    }
}

impl From<u8> for Mood {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::VeryLow,
            2 => Self::Low,
            4 => Self::Good,
            5 => Self::Great,
            _ => Self::Neutral,
        }
    }
}

impl From<Mood> for u8 {
    fn from(value: Mood) -> Self {
        value.as_u8()
    }
}

/// One logged day of metrics for a user
///
/// Uniqueness per `(userEmail, date)` is owned by the persistence
/// collaborator; the engine only ever reads these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// Owner email (normalized: trimmed, lowercased)
    pub user_email: String,
    /// Calendar date in the fixed timezone, `YYYY-MM-DD`
    pub date: String,
    /// Body weight in kg, when logged
    pub weight_kg: Option<f64>,
    /// Water intake in liters, when logged
    pub water_liters: Option<f64>,
    /// Sleep duration in hours, when logged
    pub sleep_hours: Option<f64>,
    /// Step count, when logged
    pub steps: Option<f64>,
    /// Whether the planned workout was completed
    pub workout_done: bool,
    /// Share of planned meals followed, 0-100
    pub meals_followed_pct: u8,
    /// Mood rating
    pub mood: Mood,
    /// Free-text notes
    pub notes: String,
}

impl DailyLog {
    /// Map a raw persisted document into a well-typed log
    ///
    /// Lossy and total: absent or wrong-typed metrics become `None`/defaults,
    /// the meals percentage is clamped into 0-100, and out-of-scale moods
    /// degrade to neutral. Mirrors what the tracker accepts on write.
    #[must_use]
    pub fn from_json(doc: &Value) -> Self {
        Self {
            user_email: doc
                .get("userEmail")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
            date: doc
                .get("date")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .trim()
                .to_owned(),
            weight_kg: num_or_null(doc, "weightKg"),
            water_liters: num_or_null(doc, "waterLiters"),
            sleep_hours: num_or_null(doc, "sleepHours"),
            steps: num_or_null(doc, "steps"),
            workout_done: doc
                .get("workoutDone")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            meals_followed_pct: num_or_null(doc, "mealsFollowedPct")
                .map_or(0, |v| v.clamp(0.0, 100.0).round() as u8),
            mood: doc
                .get("mood")
                .and_then(Value::as_i64)
                .and_then(|v| u8::try_from(v).ok())
                .map_or_else(Mood::default, Mood::from),
            notes: doc
                .get("notes")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned(),
        }
    }
}

/// Nullable numeric field: absent, null, or non-finite values read as `None`
fn num_or_null(doc: &Value, key: &str) -> Option<f64> {
    doc.get(key)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
}
