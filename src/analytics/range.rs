use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Aggregation window picked by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

/// Windows the stats endpoints accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsPeriod {
    Week,
    Month,
    Year,
}

impl Period {
    fn days_back(self) -> i64 {
        match self {
            Period::Day => 0,
            Period::Week => 7,
            Period::Month => 30,
            Period::Year => 365,
        }
    }

    /// `day` has no server-side stats; it falls back to `month`.
    pub fn stats_period(self) -> StatsPeriod {
        match self {
            Period::Week => StatsPeriod::Week,
            Period::Year => StatsPeriod::Year,
            Period::Day | Period::Month => StatsPeriod::Month,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period `{0}` (expected day, week, month or year)")]
pub struct ParsePeriodError(String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}

impl From<StatsPeriod> for Period {
    fn from(p: StatsPeriod) -> Self {
        match p {
            StatsPeriod::Week => Period::Week,
            StatsPeriod::Month => Period::Month,
            StatsPeriod::Year => Period::Year,
        }
    }
}

/// Inclusive calendar window, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(with = "iso_date")]
    pub end_date: Date,
}

impl DateRange {
    pub fn start(&self) -> String {
        iso(self.start_date)
    }

    pub fn end(&self) -> String {
        iso(self.end_date)
    }
}

/// Window ending today (UTC).
pub fn date_range(period: Period) -> DateRange {
    date_range_at(period, OffsetDateTime::now_utc())
}

/// Window ending on the UTC calendar date of `now`.
pub fn date_range_at(period: Period, now: OffsetDateTime) -> DateRange {
    let end_date = now.to_offset(time::UtcOffset::UTC).date();
    let start_date = end_date
        .checked_sub(Duration::days(period.days_back()))
        .unwrap_or(Date::MIN);
    DateRange {
        start_date,
        end_date,
    }
}

fn iso(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// `startDate`/`endDate` query pair for history endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DateRangeQuery<'a> {
    pub start_date: &'a str,
    pub end_date: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PeriodQuery {
    pub period: StatsPeriod,
}
