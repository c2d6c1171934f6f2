//! Forecast aggregation
//!
//! Collapses a 3-hourly forecast feed into per-day summaries. Samples are
//! bucketed by their calendar date in an explicit timezone; each bucket keeps
//! the highest `temp_max`, the lowest `temp_min` and the condition of its
//! first sample. The first bucket is usually a partial "today" and is
//! dropped, so a feed spanning six days yields five summaries.
//!
//! ```
//! use chrono_tz::Tz;
//! use domain::{ForecastAggregator, ForecastFeed};
//!
//! let aggregator = ForecastAggregator::new(Tz::UTC);
//! let feed = ForecastFeed::new(Vec::new()).unwrap();
//! assert!(aggregator.summarize(&feed).is_empty());
//! ```

use chrono_tz::Tz;

use crate::entities::{DailySummary, ForecastFeed, WeatherSample};
use crate::errors::DomainError;

/// Number of daily summaries produced unless configured otherwise
pub const DEFAULT_FORECAST_DAYS: usize = 5;

/// Reduces forecast feeds to daily summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastAggregator {
    timezone: Tz,
    max_days: usize,
}

impl ForecastAggregator {
    /// Aggregator bucketing days in `timezone`, returning up to
    /// [`DEFAULT_FORECAST_DAYS`] summaries
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            max_days: DEFAULT_FORECAST_DAYS,
        }
    }

    #[must_use]
    pub const fn with_max_days(mut self, max_days: usize) -> Self {
        self.max_days = max_days;
        self
    }

    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    pub const fn max_days(&self) -> usize {
        self.max_days
    }

    /// Summarize a validated feed
    pub fn summarize(&self, feed: &ForecastFeed) -> Vec<DailySummary> {
        let mut days: Vec<DailySummary> = Vec::new();

        // Feed timestamps are non-decreasing, so local dates are too.
        for sample in feed.samples() {
            let date = sample.timestamp.with_timezone(&self.timezone).date_naive();
            match days.last_mut() {
                Some(day) if day.date == date => day.absorb(sample),
                _ => days.push(DailySummary::open(date, sample)),
            }
        }

        days.into_iter().skip(1).take(self.max_days).collect()
    }

    /// Validate raw samples and summarize them
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` when the samples do not form a
    /// valid [`ForecastFeed`].
    pub fn summarize_samples(
        &self,
        samples: Vec<WeatherSample>,
    ) -> Result<Vec<DailySummary>, DomainError> {
        let feed = ForecastFeed::new(samples)?;
        Ok(self.summarize(&feed))
    }
}

impl Default for ForecastAggregator {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::entities::Condition;
    use crate::value_objects::Humidity;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    fn sample(at: DateTime<Utc>, temp_min: f64, temp_max: f64, code: &str) -> WeatherSample {
        WeatherSample {
            timestamp: at,
            temperature: temp_min,
            feels_like: temp_min,
            temp_max,
            temp_min,
            humidity: Humidity::new(50).unwrap(),
            pressure: 1010,
            wind_speed: 4.0,
            condition: Condition::new(code, format!("condition {code}")),
        }
    }

    /// `days` days of eight 3-hourly samples starting at midnight UTC
    fn feed(days: i64) -> Vec<WeatherSample> {
        (0..days * 8)
            .map(|i| {
                let day = i / 8;
                #[allow(clippy::cast_precision_loss)]
                let base = 10.0 + day as f64;
                #[allow(clippy::cast_precision_loss)]
                let slot = (i % 8) as f64;
                sample(
                    start() + Duration::hours(i * 3),
                    base - slot,
                    base + slot,
                    if i % 8 == 0 { "01d" } else { "04d" },
                )
            })
            .collect()
    }

    #[test]
    fn empty_feed_yields_nothing() {
        let summaries = ForecastAggregator::default().summarize_samples(Vec::new()).unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn single_day_is_dropped() {
        let summaries = ForecastAggregator::default().summarize_samples(feed(1)).unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn six_days_yield_five_ascending_summaries() {
        let summaries = ForecastAggregator::default().summarize_samples(feed(6)).unwrap();

        assert_eq!(summaries.len(), 5);
        assert_eq!(summaries[0].date, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        assert!(summaries.windows(2).all(|w| w[0].date < w[1].date));
        assert!(summaries.iter().all(|d| d.sample_count == 8));
    }

    #[test]
    fn reduction_uses_exact_extremes() {
        let summaries = ForecastAggregator::default().summarize_samples(feed(3)).unwrap();
        // day index 1: base 11, slots 0..=7
        assert!((summaries[0].temp_max - 18.0).abs() < f64::EPSILON);
        assert!((summaries[0].temp_min - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn condition_comes_from_first_sample_of_day() {
        let summaries = ForecastAggregator::default().summarize_samples(feed(2)).unwrap();
        assert_eq!(summaries[0].condition.code, "01d");
    }

    #[test]
    fn single_sample_day_uses_its_own_bounds() {
        let samples = vec![
            sample(start(), 1.0, 2.0, "01d"),
            sample(start() + Duration::days(1), 7.5, 9.25, "10d"),
        ];
        let summaries = ForecastAggregator::default().summarize_samples(samples).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].sample_count, 1);
        assert!((summaries[0].temp_max - 9.25).abs() < f64::EPSILON);
        assert!((summaries[0].temp_min - 7.5).abs() < f64::EPSILON);
        assert_eq!(summaries[0].label, "Tue, Jan 16");
    }

    #[test]
    fn max_days_caps_output() {
        let aggregator = ForecastAggregator::default().with_max_days(3);
        assert_eq!(aggregator.summarize_samples(feed(8)).unwrap().len(), 3);
    }

    #[test]
    fn timezone_moves_day_boundaries() {
        // 22:00 UTC on Jan 15 is already Jan 16 in Berlin (UTC+1).
        let late = Utc.with_ymd_and_hms(2024, 1, 15, 22, 0, 0).unwrap();
        let samples = vec![
            sample(late - Duration::hours(3), 0.0, 1.0, "01n"),
            sample(late, 0.0, 1.0, "02n"),
        ];

        let utc = ForecastAggregator::new(Tz::UTC).summarize_samples(samples.clone()).unwrap();
        assert!(utc.is_empty());

        let berlin = ForecastAggregator::new(Tz::Europe__Berlin)
            .summarize_samples(samples)
            .unwrap();
        assert_eq!(berlin.len(), 1);
        assert_eq!(berlin[0].date, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        assert_eq!(berlin[0].condition.code, "02n");
    }

    #[test]
    fn malformed_samples_are_rejected() {
        let samples = vec![
            sample(start() + Duration::hours(3), 1.0, 2.0, "01d"),
            sample(start(), 1.0, 2.0, "01d"),
        ];
        let err = ForecastAggregator::default().summarize_samples(samples).unwrap_err();
        assert!(err.is_validation());
    }
}
