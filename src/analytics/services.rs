use tracing::instrument;

use crate::{
    error::{Error, OrFallback},
    http::{ApiClient, Envelope},
};

use super::dto::{DailySteps, StatsPayload, StepsHistory, StepsStats, TodayPayload};
use super::range::{DateRangeQuery, PeriodQuery, StatsPeriod};

const TODAY_FAILED: &str = "Failed to load today's steps. Please try again.";
const HISTORY_FAILED: &str = "Failed to load step history. Please try again.";
const STATS_FAILED: &str = "Could not load step statistics. Please try again.";

#[instrument(skip(api))]
pub async fn get_today_steps(api: &ApiClient) -> Result<DailySteps, Error> {
    api.get::<TodayPayload>("/api/steps/today")
        .await
        .and_then(Envelope::into_data)
        .map(|p| p.steps)
        .or_fallback(TODAY_FAILED)
}

/// `start_date`/`end_date` are `YYYY-MM-DD` and passed through as given.
#[instrument(skip(api))]
pub async fn get_steps_history(
    api: &ApiClient,
    start_date: &str,
    end_date: &str,
) -> Result<StepsHistory, Error> {
    let query = DateRangeQuery {
        start_date,
        end_date,
    };
    api.get_with("/api/steps/history", &query)
        .await
        .and_then(Envelope::into_data)
        .or_fallback(HISTORY_FAILED)
}

#[instrument(skip(api))]
pub async fn get_steps_stats(api: &ApiClient, period: StatsPeriod) -> Result<StepsStats, Error> {
    api.get_with::<StatsPayload, _>("/api/steps/stats", &PeriodQuery { period })
        .await
        .and_then(Envelope::into_data)
        .map(|p| p.stats)
        .or_fallback(STATS_FAILED)
}
