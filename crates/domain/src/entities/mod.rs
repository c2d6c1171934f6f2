//! Domain entities - weather observations and their derived summaries

mod current_conditions;
mod daily_summary;
mod forecast_feed;
mod weather_sample;

pub use current_conditions::{CurrentConditions, Place};
pub use daily_summary::DailySummary;
pub use forecast_feed::ForecastFeed;
pub use weather_sample::{Condition, WeatherSample, timestamp_from_epoch};
