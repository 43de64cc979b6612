use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One user's steps for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySteps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub date: String,
    pub steps: u32,
    pub goal_steps: u32,
    pub distance_km: f64,
    pub calories_burned: f64,
    pub active_minutes: u32,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepsHistory {
    #[serde(default)]
    pub history: Vec<DailySteps>,
    #[serde(default)]
    pub total_steps: u64,
    #[serde(default)]
    pub average_steps: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestDay {
    pub date: String,
    pub steps: u32,
}

/// Server-side aggregate over a stats period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepsStats {
    pub total_steps: u64,
    pub average_steps: f64,
    pub total_distance_km: f64,
    pub total_calories: f64,
    pub best_day: Option<BestDay>,
    pub current_streak: u32,
    pub days_with_activity: u32,
    pub goal_reached_days: u32,
    /// Change against the previous period, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_percent: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TodayPayload {
    pub steps: DailySteps,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsPayload {
    pub stats: StepsStats,
}
