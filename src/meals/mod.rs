mod dto;
mod history;
mod services;

pub use dto::{
    DailyMeals, DailyNutrition, Food, FoodSearch, MacroTotals, Meal, MealFood, MealHistory,
    MealHistoryDay, MealStats, MealType, MealUpdate, NewMeal, NutritionGoals,
};
pub use history::{calorie_trend, CaloriePoint};
pub use services::{
    delete_meal, get_food_by_id, get_meal_history, get_meal_stats, get_nutrition_goals,
    get_today_meals, log_meal, search_foods, set_nutrition_goals, update_meal,
    DEFAULT_MAX_RESULTS,
};
