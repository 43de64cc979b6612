mod dto;
mod range;
mod services;

pub use dto::{BestDay, DailySteps, StepsHistory, StepsStats};
pub use range::{date_range, date_range_at, DateRange, ParsePeriodError, Period, StatsPeriod};
pub use services::{get_steps_history, get_steps_stats, get_today_steps};

pub(crate) use range::{DateRangeQuery, PeriodQuery};
