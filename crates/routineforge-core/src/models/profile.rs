// ABOUTME: User profile model and lossy normalization of raw profile documents
// ABOUTME: Closed enums for diet, goal, experience, location, and meals-per-day with total parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Profile normalization
//!
//! Profile documents arrive from the persistence collaborator as arbitrary
//! JSON: fields may be missing, wrong-typed, or carry out-of-enum values
//! (the original onboarding UI string-codes even numeric fields). The
//! normalizer here is a total function over all of those shapes: every field
//! resolves to a closed enum value or a documented fallback, and no input
//! ever produces an error.

use crate::constants::{profile_defaults, workout};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Dietary preference
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    /// Vegetarian
    #[default]
    Veg,
    /// Non-vegetarian
    #[serde(rename = "nonveg")]
    NonVeg,
    /// Eggetarian (vegetarian plus eggs)
    Eggetarian,
    /// Vegan
    Vegan,
}

impl DietPreference {
    /// Parse a diet preference from a string, defaulting on unrecognized input
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "nonveg" => Self::NonVeg,
            "eggetarian" => Self::Eggetarian,
            "vegan" => Self::Vegan,
            _ => Self::Veg,
        }
    }

    /// Persisted enum literal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "nonveg",
            Self::Eggetarian => "eggetarian",
            Self::Vegan => "vegan",
        }
    }

    /// True for every diet that excludes meat (meal templates treat
    /// eggetarian and vegan as vegetarian-style)
    #[must_use]
    pub const fn is_veg_style(&self) -> bool {
        !matches!(self, Self::NonVeg)
    }
}

/// Fitness goal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Build muscle mass
    #[default]
    MuscleGain,
    /// Gain overall body weight
    WeightGain,
    /// Lose body fat
    FatLoss,
    /// Maintain current composition
    Maintenance,
}

impl Goal {
    /// Parse a goal from a string, defaulting on unrecognized input
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "weight_gain" => Self::WeightGain,
            "fat_loss" => Self::FatLoss,
            "maintenance" => Self::Maintenance,
            _ => Self::MuscleGain,
        }
    }

    /// Persisted enum literal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MuscleGain => "muscle_gain",
            Self::WeightGain => "weight_gain",
            Self::FatLoss => "fat_loss",
            Self::Maintenance => "maintenance",
        }
    }

    /// True when the goal is fat loss (selects the lighter meal and workout
    /// templates)
    #[must_use]
    pub const fn is_fat_loss(&self) -> bool {
        matches!(self, Self::FatLoss)
    }
}

/// Training experience level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to training
    #[default]
    Beginner,
    /// Some consistent training history
    Intermediate,
    /// Long training history
    Advanced,
}

impl ExperienceLevel {
    /// Parse an experience level from a string, defaulting on unrecognized input
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }

    /// Persisted enum literal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Capitalized display label for workout subtitles
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Where workouts happen
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutLocation {
    /// Bodyweight/bands at home
    #[default]
    Home,
    /// Gym with equipment
    Gym,
}

impl WorkoutLocation {
    /// Parse a workout location from a string, defaulting on unrecognized input
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "gym" => Self::Gym,
            _ => Self::Home,
        }
    }

    /// Persisted enum literal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Gym => "gym",
        }
    }
}

/// Meals per day (persistence string-codes this as "3" | "4" | "5")
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealsPerDay {
    /// Breakfast, lunch, dinner
    #[default]
    #[serde(rename = "3")]
    Three,
    /// Plus an evening snack
    #[serde(rename = "4")]
    Four,
    /// Plus mid-morning and evening snacks
    #[serde(rename = "5")]
    Five,
}

impl MealsPerDay {
    /// Parse meals-per-day from a string, defaulting on unrecognized input
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim() {
            "4" => Self::Four,
            "5" => Self::Five,
            _ => Self::Three,
        }
    }

    /// Parse meals-per-day from a count, defaulting on out-of-enum values
    #[must_use]
    pub const fn from_count_lossy(count: i64) -> Self {
        match count {
            4 => Self::Four,
            5 => Self::Five,
            _ => Self::Three,
        }
    }

    /// Number of meal slots
    #[must_use]
    pub const fn count(&self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

/// Self-reported activity level outside training (informational)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Mostly sedentary
    Low,
    /// Moderately active
    #[default]
    Medium,
    /// Very active
    High,
}

impl ActivityLevel {
    /// Parse an activity level from a string, defaulting on unrecognized input
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// Normalized user profile, the input record for plan generation
///
/// Produced exclusively through [`UserProfile::from_json`]; every field is
/// already defaulted and well-typed by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Owner email as stored on the document (may be empty on legacy docs)
    pub user_email: String,
    /// Work start, `HH:MM` local wall-clock
    pub work_start: String,
    /// Work end, `HH:MM` local wall-clock
    pub work_end: String,
    /// Dietary preference
    pub diet_preference: DietPreference,
    /// Fitness goal
    pub goal: Goal,
    /// Training experience
    pub experience: ExperienceLevel,
    /// Workout location
    pub workout_location: WorkoutLocation,
    /// Requested workout minutes per day (clamped later by the workout builder)
    pub workout_minutes_per_day: i64,
    /// Meals per day
    pub meals_per_day: MealsPerDay,
    /// Height in cm, when present and numeric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kg, when present and numeric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Age in years, when present and numeric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Free-text profession
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    /// Self-reported activity level
    pub activity_level: ActivityLevel,
}

impl UserProfile {
    /// Normalize a raw profile document into a well-typed profile
    ///
    /// Total over all JSON shapes: missing fields, wrong-typed fields, and
    /// out-of-enum values all degrade silently to the documented fallbacks
    /// (veg / muscle_gain / beginner / home / 3 meals, work 10:30-20:00,
    /// 35 workout minutes).
    #[must_use]
    pub fn from_json(doc: &Value) -> Self {
        let profile = Self {
            user_email: str_field(doc, "userEmail").unwrap_or_default().to_owned(),
            work_start: str_field(doc, "workStart")
                .unwrap_or(profile_defaults::DEFAULT_WORK_START)
                .to_owned(),
            work_end: str_field(doc, "workEnd")
                .unwrap_or(profile_defaults::DEFAULT_WORK_END)
                .to_owned(),
            diet_preference: str_field(doc, "dietPreference")
                .map_or_else(DietPreference::default, DietPreference::from_str_lossy),
            goal: str_field(doc, "goal").map_or_else(Goal::default, Goal::from_str_lossy),
            experience: str_field(doc, "experience")
                .map_or_else(ExperienceLevel::default, ExperienceLevel::from_str_lossy),
            workout_location: str_field(doc, "workoutLocation")
                .map_or_else(WorkoutLocation::default, WorkoutLocation::from_str_lossy),
            workout_minutes_per_day: num_field(doc, "workoutMinutesPerDay")
                .map_or(workout::DEFAULT_MINUTES, |v| v as i64),
            meals_per_day: meals_per_day_field(doc),
            height_cm: num_field(doc, "heightCm"),
            weight_kg: num_field(doc, "weightKg"),
            age: num_field(doc, "age").filter(|v| *v >= 0.0).map(|v| v as u32),
            profession: str_field(doc, "profession").map(str::to_owned),
            activity_level: str_field(doc, "activityLevel")
                .map_or_else(ActivityLevel::default, ActivityLevel::from_str_lossy),
        };

        debug!(
            goal = profile.goal.as_str(),
            diet = profile.diet_preference.as_str(),
            meals = profile.meals_per_day.count(),
            "normalized profile document"
        );

        profile
    }
}

/// String field accessor; non-string values read as absent
fn str_field<'a>(doc: &'a Value, key: &str) -> Option<&'a str> {
    doc.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Numeric field accessor accepting both numbers and numeric strings
/// (legacy documents string-code numerics)
fn num_field(doc: &Value, key: &str) -> Option<f64> {
    match doc.get(key) {
        Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Meals-per-day accepts both the string-coded form and a bare number
fn meals_per_day_field(doc: &Value) -> MealsPerDay {
    match doc.get("mealsPerDay") {
        Some(Value::String(s)) => MealsPerDay::from_str_lossy(s),
        Some(Value::Number(n)) => n
            .as_i64()
            .map_or_else(MealsPerDay::default, MealsPerDay::from_count_lossy),
        _ => MealsPerDay::default(),
    }
}
