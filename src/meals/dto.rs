use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::analytics::StatsPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Food database entry, nutrition given per `serving_size` `serving_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub food_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    pub serving_size: f64,
    pub serving_unit: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSearch {
    #[serde(default)]
    pub foods: Vec<Food>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u32>,
}

/// Line item of a meal: a food at a given serving, nutrition already scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealFood {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_id: Option<String>,
    pub food_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    pub serving_size: f64,
    pub serving_unit: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl From<&Food> for MealFood {
    fn from(food: &Food) -> Self {
        Self {
            id: None,
            food_id: Some(food.food_id.clone()),
            food_name: food.name.clone(),
            brand_name: food.brand_name.clone(),
            serving_size: food.serving_size,
            serving_unit: food.serving_unit.clone(),
            calories: food.calories,
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
        }
    }
}

impl MealFood {
    /// Same item at a new serving size. Calories round to whole units, macros to 0.1 g.
    ///
    /// Non-positive servings, or an item without a usable serving, come back unchanged.
    pub fn rescaled(&self, serving_size: f64) -> MealFood {
        if serving_size <= 0.0 || self.serving_size <= 0.0 {
            return self.clone();
        }
        let ratio = serving_size / self.serving_size;
        let tenth = |v: f64| (v * ratio * 10.0).round() / 10.0;
        MealFood {
            serving_size,
            calories: (self.calories * ratio).round(),
            protein: tenth(self.protein),
            carbs: tenth(self.carbs),
            fat: tenth(self.fat),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

/// Meal as submitted to `/api/meals/log`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeal {
    pub meal_type: MealType,
    /// `YYYY-MM-DD`; not validated client-side.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub foods: Vec<MealFood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewMeal {
    /// Running sum over the foods added so far. The saved meal's totals come from the server.
    pub fn running_totals(&self) -> MacroTotals {
        self.foods.iter().fold(MacroTotals::default(), |acc, f| MacroTotals {
            calories: acc.calories + f.calories,
            protein: acc.protein + f.protein,
            carbs: acc.carbs + f.carbs,
            fat: acc.fat + f.fat,
        })
    }
}

/// Stored meal. Totals are computed by the backend and default to zero when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub entry: NewMeal,
    #[serde(default)]
    pub total_calories: f64,
    #[serde(default)]
    pub total_protein: f64,
    #[serde(default)]
    pub total_carbs: f64,
    #[serde(default)]
    pub total_fat: f64,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
}

/// Partial meal update; only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foods: Option<Vec<MealFood>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `data` of `/api/meals/today`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMeals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub totals: MacroTotals,
    #[serde(default)]
    pub goals: MacroTotals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<MacroTotals>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealHistoryDay {
    pub date: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub totals: MacroTotals,
}

/// `data` of `/api/meals/history`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealHistory {
    #[serde(default)]
    pub history: Vec<MealHistoryDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutrition {
    pub date: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

/// Server-side nutrition aggregate over a stats period; absent fields read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MealStats {
    pub period: Option<StatsPeriod>,
    pub total_calories: f64,
    pub average_calories: f64,
    pub total_protein: f64,
    pub average_protein: f64,
    pub total_carbs: f64,
    pub average_carbs: f64,
    pub total_fat: f64,
    pub average_fat: f64,
    pub days_logged: u32,
    pub total_meals: u32,
    pub goal_reached_days: u32,
    pub daily_breakdown: Vec<DailyNutrition>,
}

/// Daily targets, one set per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoals {
    pub daily_calories: f64,
    pub daily_protein: f64,
    pub daily_carbs: f64,
    pub daily_fat: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FoodQuery<'a> {
    pub query: &'a str,
    pub max_results: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rice() -> MealFood {
        MealFood {
            id: None,
            food_id: None,
            food_name: "Rice".into(),
            brand_name: None,
            serving_size: 100.0,
            serving_unit: "g".into(),
            calories: 130.0,
            protein: 2.7,
            carbs: 28.0,
            fat: 0.3,
        }
    }

    #[test]
    fn rescale_rounds_like_the_meal_form() {
        let bigger = rice().rescaled(200.0);
        assert_eq!(bigger.serving_size, 200.0);
        assert_eq!(bigger.calories, 260.0);
        assert_eq!(bigger.protein, 5.4);
        assert_eq!(bigger.carbs, 56.0);
        assert_eq!(bigger.fat, 0.6);

        let smaller = rice().rescaled(30.0);
        assert_eq!(smaller.calories, 39.0);
        assert_eq!(smaller.carbs, 8.4);
        assert_eq!(bigger.food_name, "Rice");
    }

    #[test]
    fn rescale_ignores_non_positive_servings() {
        assert_eq!(rice().rescaled(0.0), rice());
        assert_eq!(rice().rescaled(-10.0), rice());
    }

    #[test]
    fn running_totals_sum_added_foods() {
        let meal = NewMeal {
            meal_type: MealType::Dinner,
            date: "2024-01-01".into(),
            foods: vec![rice(), rice().rescaled(50.0)],
            notes: None,
        };
        let totals = meal.running_totals();
        assert_eq!(totals.calories, 130.0 + 65.0);
        assert!((totals.protein - (2.7 + 1.4)).abs() < 1e-9);
    }

    #[test]
    fn meal_flattens_submitted_fields() {
        let raw = json!({
            "id": "9a1b2c3d-4e5f-4a6b-8c7d-0e1f2a3b4c5d",
            "mealType": "breakfast",
            "date": "2024-01-02",
            "foods": [],
            "totalCalories": 420,
            "createdAt": "2024-01-02T07:45:00.000Z"
        });
        let meal: Meal = serde_json::from_value(raw).unwrap();
        assert_eq!(meal.entry.meal_type, MealType::Breakfast);
        assert_eq!(meal.total_calories, 420.0);
        assert_eq!(meal.total_fat, 0.0);
        assert!(meal.created_at.is_some());
    }

    #[test]
    fn stats_missing_fields_default_to_zero() {
        let stats: MealStats = serde_json::from_value(json!({ "period": "week", "daysLogged": 3 })).unwrap();
        assert_eq!(stats.period, Some(StatsPeriod::Week));
        assert_eq!(stats.days_logged, 3);
        assert_eq!(stats.average_calories, 0.0);
        assert!(stats.daily_breakdown.is_empty());
    }

    #[test]
    fn meal_food_from_search_result() {
        let food = Food {
            food_id: "fdc-171287".into(),
            name: "Egg, whole".into(),
            brand_name: None,
            serving_size: 50.0,
            serving_unit: "g".into(),
            calories: 72.0,
            protein: 6.3,
            carbs: 0.4,
            fat: 4.8,
        };
        let item = MealFood::from(&food);
        assert_eq!(item.food_id.as_deref(), Some("fdc-171287"));
        assert_eq!(item.food_name, "Egg, whole");
        assert!(item.id.is_none());
    }
}
