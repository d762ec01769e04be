// ABOUTME: Meal slot templates and calorie distribution with drift correction
// ABOUTME: Slot lists and weight vectors per meals-per-day, template text keyed by diet and goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Meal planning
//!
//! The daily calorie budget is a step function of the goal alone
//! (1700 / 2000 / 2400 kcal). Each meals-per-day setting maps to a fixed
//! ordered slot list and a fixed weight vector; every slot except the last
//! gets its weight rounded independently, and the final slot absorbs the
//! residual so the emitted calories always sum to the budget exactly.

use routineforge_core::constants::calories;
use routineforge_core::models::{DietPreference, Goal, MealItem, MealsPerDay};

/// Calorie weight vectors per meals-per-day; the last entry absorbs rounding
/// drift, so each vector must sum to 1.0
const WEIGHTS_THREE: [f64; 3] = [0.25, 0.40, 0.35];
const WEIGHTS_FOUR: [f64; 4] = [0.25, 0.35, 0.15, 0.25];
const WEIGHTS_FIVE: [f64; 5] = [0.22, 0.10, 0.35, 0.13, 0.20];

/// Named meal slots in their fixed daily order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MealSlot {
    Breakfast,
    MidMorningSnack,
    Lunch,
    EveningSnack,
    Dinner,
}

impl MealSlot {
    const fn name(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::MidMorningSnack => "Mid-morning Snack",
            Self::Lunch => "Lunch",
            Self::EveningSnack => "Evening Snack",
            Self::Dinner => "Dinner",
        }
    }

    /// Template description keyed by vegetarian-style and fat-loss flags
    const fn description(self, veg_style: bool, fat_loss: bool) -> &'static str {
        match (self, veg_style, fat_loss) {
            (Self::Breakfast, true, true) => "Moong dal chilla + curd / tofu dip",
            (Self::Breakfast, true, false) => "Oats + fruits + nuts (add milk/curd or soy milk)",
            (Self::Breakfast, false, true) => "Egg omelette + fruit",
            (Self::Breakfast, false, false) => "Oats + fruits + nuts + eggs",

            (Self::MidMorningSnack, true, true) => "Buttermilk + roasted chana",
            (Self::MidMorningSnack, true, false) => "Fruit + a handful of nuts",
            (Self::MidMorningSnack, false, true) => "Boiled egg + cucumber sticks",
            (Self::MidMorningSnack, false, false) => "Boiled eggs + fruit",

            (Self::Lunch, true, true) => "Dal + salad + 2 rotis (or quinoa) + sabzi",
            (Self::Lunch, true, false) => "Rajma/chole + rice + salad + curd (optional)",
            (Self::Lunch, false, true) => "Grilled chicken/fish + salad + small rice/roti",
            (Self::Lunch, false, false) => "Grilled chicken + rice + veggies",

            (Self::EveningSnack, true, true) => "Green tea + roasted makhana",
            (Self::EveningSnack, true, false) => "Sprouts chaat / peanut salad",
            (Self::EveningSnack, false, true) => "Chicken soup / boiled egg",
            (Self::EveningSnack, false, false) => "Peanut butter toast + milk",

            (Self::Dinner, true, true) => "Paneer/tofu bhurji + veggies + light roti",
            (Self::Dinner, true, false) => "Paneer/tofu + veggies + 2 rotis",
            (Self::Dinner, false, true) => "Chicken curry (lean) + veggies + light roti",
            (Self::Dinner, false, false) => "Fish/chicken + veggies + roti",
        }
    }
}

/// Fixed ordered slot list for a meals-per-day setting
const fn slots(meals_per_day: MealsPerDay) -> &'static [MealSlot] {
    match meals_per_day {
        MealsPerDay::Three => &[MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner],
        MealsPerDay::Four => &[
            MealSlot::Breakfast,
            MealSlot::Lunch,
            MealSlot::EveningSnack,
            MealSlot::Dinner,
        ],
        MealsPerDay::Five => &[
            MealSlot::Breakfast,
            MealSlot::MidMorningSnack,
            MealSlot::Lunch,
            MealSlot::EveningSnack,
            MealSlot::Dinner,
        ],
    }
}

const fn weights(meals_per_day: MealsPerDay) -> &'static [f64] {
    match meals_per_day {
        MealsPerDay::Three => &WEIGHTS_THREE,
        MealsPerDay::Four => &WEIGHTS_FOUR,
        MealsPerDay::Five => &WEIGHTS_FIVE,
    }
}

/// Total daily calorie budget for a goal
///
/// Diet preference does not move the budget; the historic vegan adjustment
/// was retired with the current template set.
#[must_use]
pub const fn daily_calories(goal: Goal) -> u32 {
    match goal {
        Goal::FatLoss => calories::FAT_LOSS_DAILY_KCAL,
        Goal::Maintenance => calories::MAINTENANCE_DAILY_KCAL,
        Goal::MuscleGain | Goal::WeightGain => calories::SURPLUS_DAILY_KCAL,
    }
}

/// The planned meals plus the budget they sum to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlan {
    /// Meal slots in daily order
    pub meals: Vec<MealItem>,
    /// Total daily calories; always equals the sum of the slots
    pub total_kcal: u32,
}

/// Plan the day's meals for a diet, goal, and meals-per-day setting
#[must_use]
pub fn plan_meals(diet: DietPreference, goal: Goal, meals_per_day: MealsPerDay) -> MealPlan {
    let total = daily_calories(goal);
    let veg_style = diet.is_veg_style();
    let fat_loss = goal.is_fat_loss();

    let slot_list = slots(meals_per_day);
    let weight_list = weights(meals_per_day);

    let mut meals = Vec::with_capacity(slot_list.len());
    let mut allocated: i64 = 0;

    for (idx, slot) in slot_list.iter().enumerate() {
        let kcal = if idx + 1 == slot_list.len() {
            // Final slot absorbs the rounding drift so the parts sum exactly.
            // The weight vectors keep every earlier share well under the
            // total, so the residual is always positive.
            (i64::from(total) - allocated).max(0) as u32
        } else {
            (f64::from(total) * weight_list[idx]).round() as u32
        };
        allocated += i64::from(kcal);
        meals.push(MealItem {
            name: slot.name().to_owned(),
            desc: slot.description(veg_style, fat_loss).to_owned(),
            kcal,
        });
    }

    MealPlan { meals, total_kcal: total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_meal_fat_loss_distribution() {
        let plan = plan_meals(DietPreference::NonVeg, Goal::FatLoss, MealsPerDay::Four);
        let kcals: Vec<u32> = plan.meals.iter().map(|m| m.kcal).collect();
        assert_eq!(kcals, vec![425, 595, 255, 425]);
        assert_eq!(plan.total_kcal, 1700);

        let names: Vec<&str> = plan.meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Breakfast", "Lunch", "Evening Snack", "Dinner"]);
    }

    #[test]
    fn test_calorie_conservation_all_combinations() {
        for meals_per_day in [MealsPerDay::Three, MealsPerDay::Four, MealsPerDay::Five] {
            for goal in [
                Goal::MuscleGain,
                Goal::WeightGain,
                Goal::FatLoss,
                Goal::Maintenance,
            ] {
                let plan = plan_meals(DietPreference::Veg, goal, meals_per_day);
                let sum: u32 = plan.meals.iter().map(|m| m.kcal).sum();
                assert_eq!(sum, daily_calories(goal), "{goal:?}/{meals_per_day:?}");
                assert_eq!(plan.meals.len(), meals_per_day.count());
            }
        }
    }

    #[test]
    fn test_diet_does_not_move_the_budget() {
        for diet in [
            DietPreference::Veg,
            DietPreference::NonVeg,
            DietPreference::Eggetarian,
            DietPreference::Vegan,
        ] {
            let plan = plan_meals(diet, Goal::Maintenance, MealsPerDay::Three);
            assert_eq!(plan.total_kcal, 2000);
        }
    }

    #[test]
    fn test_five_meal_slot_order() {
        let plan = plan_meals(DietPreference::Veg, Goal::MuscleGain, MealsPerDay::Five);
        let names: Vec<&str> = plan.meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Breakfast",
                "Mid-morning Snack",
                "Lunch",
                "Evening Snack",
                "Dinner"
            ]
        );
    }
}
