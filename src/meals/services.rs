use tracing::{info, instrument};

use crate::{
    analytics::{DateRangeQuery, PeriodQuery, StatsPeriod},
    error::{Error, OrFallback},
    http::{segment, ApiClient, Envelope},
};

use super::dto::{
    DailyMeals, Food, FoodQuery, FoodSearch, Meal, MealHistory, MealStats, MealUpdate, NewMeal,
    NutritionGoals,
};

const SEARCH_FAILED: &str = "Food search failed. Please try again.";
const FOOD_FAILED: &str = "Failed to load food details. Please try again.";
const TODAY_FAILED: &str = "Failed to load meals. Please try again.";
const LOG_FAILED: &str = "Failed to log meal. Please try again.";
const HISTORY_FAILED: &str = "Failed to load meal history.";
const STATS_FAILED: &str = "Failed to load analytics. Please try again.";
const UPDATE_FAILED: &str = "Failed to update meal. Please try again.";
const DELETE_FAILED: &str = "Failed to delete meal";
const SET_GOALS_FAILED: &str = "Failed to save goals. Please try again.";
const GET_GOALS_FAILED: &str = "Failed to load nutrition goals. Please try again.";

pub const DEFAULT_MAX_RESULTS: u32 = 10;

// --- food database ---

#[instrument(skip(api))]
pub async fn search_foods(api: &ApiClient, query: &str, max_results: u32) -> Result<FoodSearch, Error> {
    api.get_with("/api/foods/search", &FoodQuery { query, max_results })
        .await
        .and_then(Envelope::into_data)
        .or_fallback(SEARCH_FAILED)
}

#[instrument(skip(api))]
pub async fn get_food_by_id(api: &ApiClient, food_id: &str) -> Result<Food, Error> {
    api.get(&format!("/api/foods/{}", segment(food_id)))
        .await
        .and_then(Envelope::into_data)
        .or_fallback(FOOD_FAILED)
}

// --- meals ---

#[instrument(skip(api))]
pub async fn get_today_meals(api: &ApiClient) -> Result<DailyMeals, Error> {
    api.get("/api/meals/today")
        .await
        .and_then(Envelope::into_data)
        .or_fallback(TODAY_FAILED)
}

#[instrument(skip(api, meal), fields(meal_type = ?meal.meal_type, foods = meal.foods.len()))]
pub async fn log_meal(api: &ApiClient, meal: &NewMeal) -> Result<Meal, Error> {
    let saved: Meal = api
        .post("/api/meals/log", meal)
        .await
        .and_then(Envelope::into_data)
        .or_fallback(LOG_FAILED)?;

    info!(meal_id = ?saved.id, "meal logged");
    Ok(saved)
}

/// Dates are `YYYY-MM-DD` and passed through unchecked.
#[instrument(skip(api))]
pub async fn get_meal_history(
    api: &ApiClient,
    start_date: &str,
    end_date: &str,
) -> Result<MealHistory, Error> {
    let query = DateRangeQuery {
        start_date,
        end_date,
    };
    api.get_with("/api/meals/history", &query)
        .await
        .and_then(Envelope::into_data)
        .or_fallback(HISTORY_FAILED)
}

#[instrument(skip(api))]
pub async fn get_meal_stats(api: &ApiClient, period: StatsPeriod) -> Result<MealStats, Error> {
    api.get_with("/api/meals/stats", &PeriodQuery { period })
        .await
        .and_then(Envelope::into_data)
        .or_fallback(STATS_FAILED)
}

#[instrument(skip(api, changes))]
pub async fn update_meal(api: &ApiClient, meal_id: &str, changes: &MealUpdate) -> Result<Meal, Error> {
    api.patch(&format!("/api/meals/{}", segment(meal_id)), changes)
        .await
        .and_then(Envelope::into_data)
        .or_fallback(UPDATE_FAILED)
}

#[instrument(skip(api))]
pub async fn delete_meal(api: &ApiClient, meal_id: &str) -> Result<(), Error> {
    api.delete::<serde_json::Value>(&format!("/api/meals/{}", segment(meal_id)))
        .await
        .and_then(Envelope::into_ack)
        .or_fallback(DELETE_FAILED)?;

    info!(meal_id, "meal deleted");
    Ok(())
}

// --- nutrition goals ---

#[instrument(skip(api))]
pub async fn set_nutrition_goals(api: &ApiClient, goals: &NutritionGoals) -> Result<NutritionGoals, Error> {
    api.post("/api/nutrition/goals", goals)
        .await
        .and_then(Envelope::into_data)
        .or_fallback(SET_GOALS_FAILED)
}

#[instrument(skip(api))]
pub async fn get_nutrition_goals(api: &ApiClient) -> Result<NutritionGoals, Error> {
    api.get("/api/nutrition/goals")
        .await
        .and_then(Envelope::into_data)
        .or_fallback(GET_GOALS_FAILED)
}
