//! Per-day forecast summary

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::weather_sample::{Condition, WeatherSample};

/// One calendar day reduced from a forecast feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Calendar date in the aggregation timezone
    pub date: NaiveDate,
    /// Short display label such as `"Mon, Jan 15"`
    pub label: String,
    /// Highest `temp_max` of the day's samples
    pub temp_max: f64,
    /// Lowest `temp_min` of the day's samples
    pub temp_min: f64,
    /// Condition of the first sample of the day
    pub condition: Condition,
    /// Number of samples that fell on this day
    pub sample_count: usize,
}

impl DailySummary {
    /// Open a summary from the first sample of a day
    pub(crate) fn open(date: NaiveDate, first: &WeatherSample) -> Self {
        Self {
            date,
            label: Self::label_for(date),
            temp_max: first.temp_max,
            temp_min: first.temp_min,
            condition: first.condition.clone(),
            sample_count: 1,
        }
    }

    /// Fold a later sample of the same day into the summary
    pub(crate) fn absorb(&mut self, sample: &WeatherSample) {
        self.temp_max = self.temp_max.max(sample.temp_max);
        self.temp_min = self.temp_min.min(sample.temp_min);
        self.sample_count += 1;
    }

    /// en-US short weekday, month and day
    pub fn label_for(date: NaiveDate) -> String {
        date.format("%a, %b %-d").to_string()
    }
}
