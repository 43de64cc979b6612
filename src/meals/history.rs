use serde::Serialize;

use super::dto::MealHistory;

/// One point of the daily calorie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaloriePoint {
    pub date: String,
    pub calories: f64,
}

/// Reshapes meal history into chart points, oldest day first.
///
/// Uses the per-day totals the server sent; nothing is re-summed here.
pub fn calorie_trend(history: &MealHistory) -> Vec<CaloriePoint> {
    let mut points: Vec<CaloriePoint> = history
        .history
        .iter()
        .map(|day| CaloriePoint {
            date: day.date.clone(),
            calories: day.totals.calories,
        })
        .collect();
    // ISO dates order lexicographically.
    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}
