//! Synthetic weather client
//!
//! Generates randomized but plausible weather data locally, used when no
//! real API key is configured. Responses arrive after fixed delays so the
//! calling code sees the same asynchronous timing as the live client.

use std::ops::RangeInclusive;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Days, DurationRound, TimeDelta, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use rand::Rng;
use tracing::{debug, instrument};

use crate::client::{WeatherClient, WeatherError};
use crate::models::{
    CurrentWeatherResponse, ForecastItem, ForecastResponse, MainReadings, SysInfo,
    WeatherDescription, Wind,
};

/// Centre of the synthetic daily temperature
const BASE_TEMPERATURE: f64 = 22.0;

/// Day profiles: description, icon code and spread around the day temperature
const DAY_PROFILES: [(&str, &str, f64); 5] = [
    ("sunny", "01d", 8.0),
    ("partly cloudy", "02d", 6.0),
    ("cloudy", "03d", 4.0),
    ("light rain", "10d", 2.0),
    ("overcast", "04d", 3.0),
];

/// Bounds applied when nudging the current or daily maximum temperature
pub const HIGH_TEMPERATURE_BOUNDS: RangeInclusive<f64> = 10.0..=40.0;

/// Bounds applied when nudging the daily minimum temperature
pub const LOW_TEMPERATURE_BOUNDS: RangeInclusive<f64> = 5.0..=35.0;

/// Synthetic client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticConfig {
    /// Delay before current conditions are returned
    pub current_delay: Duration,
    /// Delay before the forecast is returned
    pub forecast_delay: Duration,
    /// Full days generated after today
    pub forecast_days: u32,
    /// Zone whose calendar days the forecast is laid out on
    pub timezone: Tz,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            current_delay: Duration::from_millis(1000),
            forecast_delay: Duration::from_millis(500),
            forecast_days: 5,
            timezone: Tz::UTC,
        }
    }
}

/// Weather client producing random demo data without network access
#[derive(Debug, Clone, Default)]
pub struct SyntheticClient {
    config: SyntheticConfig,
}

impl SyntheticClient {
    pub const fn new(config: SyntheticConfig) -> Self {
        Self { config }
    }

    /// Current conditions with temperatures in [10, 40], humidity in
    /// [40, 80], pressure in [1000, 1200] and wind in [2, 12]
    pub fn generate_current<R: Rng + ?Sized>(
        place: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> CurrentWeatherResponse {
        let temp = f64::from(rng.random_range(10_i32..=40));
        CurrentWeatherResponse {
            name: place.to_string(),
            sys: SysInfo {
                country: Some(String::new()),
            },
            dt: now.timestamp(),
            timezone: 0,
            weather: vec![WeatherDescription {
                id: None,
                main: None,
                description: "partly cloudy".to_string(),
                icon: "02d".to_string(),
            }],
            main: MainReadings {
                temp,
                feels_like: Some(f64::from(rng.random_range(10_i32..=40))),
                temp_min: Some(temp),
                temp_max: Some(temp),
                pressure: Some(f64::from(rng.random_range(1000_i32..=1200))),
                humidity: Some(f64::from(rng.random_range(40_i32..=80))),
            },
            wind: Some(Wind {
                speed: f64::from(rng.random_range(2_i32..=12)),
                deg: None,
            }),
        }
    }

    /// 3-hourly forecast from the start of the current hour to local
    /// midnight after the last forecast day
    ///
    /// Days are calendar days in the configured zone. The remainder of
    /// today is included so that dropping the first day still leaves
    /// `forecast_days` full days.
    pub fn generate_forecast<R: Rng + ?Sized>(
        &self,
        place: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> ForecastResponse {
        let start = now
            .duration_trunc(TimeDelta::hours(1))
            .unwrap_or(now);
        let tz = self.config.timezone;
        let today = start.with_timezone(&tz).date_naive();
        let end = today
            .checked_add_days(Days::new(u64::from(self.config.forecast_days) + 1))
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .and_then(|midnight| tz.from_local_datetime(&midnight).earliest())
            .map_or(start, |d| d.with_timezone(&Utc));

        let day_count = usize::try_from(self.config.forecast_days).unwrap_or(0) + 1;
        let plans: Vec<DayPlan> = (0..day_count).map(|_| DayPlan::random(rng)).collect();

        let mut list = Vec::new();
        let mut at = start;
        while at < end {
            let local = at.with_timezone(&tz);
            let offset = (local.date_naive() - today).num_days();
            let Some(plan) = usize::try_from(offset).ok().and_then(|i| plans.get(i)) else {
                break;
            };

            let slot = f64::from(local.hour() / 3);
            let hour_temp = plan.temp_min
                + (plan.temp_max - plan.temp_min)
                    * 0.4f64.mul_add((slot * std::f64::consts::PI / 7.0).sin(), 0.3);

            list.push(ForecastItem {
                dt: at.timestamp(),
                main: MainReadings {
                    temp: hour_temp.round(),
                    feels_like: Some(hour_temp.round()),
                    temp_min: Some(plan.temp_min),
                    temp_max: Some(plan.temp_max),
                    pressure: Some(f64::from(rng.random_range(1000_i32..=1200))),
                    humidity: Some(f64::from(rng.random_range(40_i32..=80))),
                },
                weather: vec![WeatherDescription {
                    id: None,
                    main: None,
                    description: plan.description.to_string(),
                    icon: plan.icon.to_string(),
                }],
                wind: Some(Wind {
                    speed: f64::from(rng.random_range(2_i32..=12)),
                    deg: None,
                }),
                dt_txt: Some(at.format("%Y-%m-%d %H:%M:%S").to_string()),
            });

            at += TimeDelta::hours(3);
        }

        debug!(place, samples = list.len(), "Generated synthetic forecast");
        ForecastResponse { list, city: None }
    }
}

/// Condition and temperature envelope for one synthetic day
#[derive(Debug, Clone, Copy)]
struct DayPlan {
    description: &'static str,
    icon: &'static str,
    temp_max: f64,
    temp_min: f64,
}

impl DayPlan {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (description, icon, spread) = DAY_PROFILES[rng.random_range(0..DAY_PROFILES.len())];
        let day_temp = BASE_TEMPERATURE + rng.random_range(-5.0..5.0);
        Self {
            description,
            icon,
            temp_max: (day_temp + spread + rng.random_range(0.0..3.0)).round(),
            temp_min: (day_temp - spread - rng.random_range(0.0..3.0)).round(),
        }
    }
}

/// Nudge a displayed temperature by up to one degree, staying within bounds
pub fn drift<R: Rng + ?Sized>(value: f64, bounds: &RangeInclusive<f64>, rng: &mut R) -> f64 {
    let step = rng.random_range(-1.0..=1.0);
    (value + step).clamp(*bounds.start(), *bounds.end()).round()
}

#[async_trait]
impl WeatherClient for SyntheticClient {
    #[instrument(skip(self))]
    async fn get_current(&self, place: &str) -> Result<CurrentWeatherResponse, WeatherError> {
        tokio::time::sleep(self.config.current_delay).await;
        Ok(Self::generate_current(place, Utc::now(), &mut rand::rng()))
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, place: &str) -> Result<ForecastResponse, WeatherError> {
        tokio::time::sleep(self.config.forecast_delay).await;
        Ok(self.generate_forecast(place, Utc::now(), &mut rand::rng()))
    }

    fn name(&self) -> &'static str {
        "synthetic"
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 41, 7).unwrap()
    }

    #[test]
    fn current_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let current = SyntheticClient::generate_current("Lyon", noon(), &mut rng);
            assert_eq!(current.name, "Lyon");
            assert!((10.0..=40.0).contains(&current.main.temp));
            assert!((10.0..=40.0).contains(&current.main.feels_like.unwrap()));
            assert!((40.0..=80.0).contains(&current.main.humidity.unwrap()));
            assert!((1000.0..=1200.0).contains(&current.main.pressure.unwrap()));
            assert!((2.0..=12.0).contains(&current.wind.as_ref().unwrap().speed));
            assert_eq!(current.weather[0].icon, "02d");
            assert_eq!(current.sys.country.as_deref(), Some(""));
        }
    }

    #[test]
    fn forecast_starts_at_current_hour() {
        let client = SyntheticClient::default();
        let forecast = client.generate_forecast("Lyon", noon(), &mut StdRng::seed_from_u64(1));

        let first = forecast.list.first().unwrap();
        assert_eq!(first.dt, Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap().timestamp());
        assert!(forecast.list.windows(2).all(|w| w[1].dt - w[0].dt == 3 * 3600));
    }

    #[test]
    fn forecast_covers_today_plus_five_days() {
        let client = SyntheticClient::default();
        let forecast = client.generate_forecast("Lyon", noon(), &mut StdRng::seed_from_u64(2));

        let end = Utc.with_ymd_and_hms(2024, 1, 21, 0, 0, 0).unwrap().timestamp();
        let last = forecast.list.last().unwrap();
        assert!(last.dt < end);
        assert!(last.dt >= end - 3 * 3600);
        // 12:00..21:00 today (4 slots) plus 5 full days of 8 slots
        assert_eq!(forecast.list.len(), 4 + 5 * 8);
    }

    #[test]
    fn forecast_days_follow_configured_zone() {
        let client = SyntheticClient::new(SyntheticConfig {
            timezone: Tz::Asia__Tokyo,
            ..SyntheticConfig::default()
        });
        // 06:10 on Jan 16 in Tokyo
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 21, 10, 0).unwrap();
        let forecast = client.generate_forecast("Tokyo", now, &mut StdRng::seed_from_u64(4));

        let local_days: Vec<_> = forecast
            .list
            .iter()
            .map(|item| {
                DateTime::from_timestamp(item.dt, 0)
                    .unwrap()
                    .with_timezone(&Tz::Asia__Tokyo)
                    .date_naive()
            })
            .collect();
        let today = chrono::NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();

        assert_eq!(local_days.iter().filter(|d| **d == today).count(), 6);
        for offset in 1..=5 {
            let day = today.checked_add_days(Days::new(offset)).unwrap();
            assert_eq!(local_days.iter().filter(|d| **d == day).count(), 8, "{day}");
        }
        assert_eq!(forecast.list.len(), 6 + 5 * 8);

        let end = Utc.with_ymd_and_hms(2024, 1, 21, 15, 0, 0).unwrap().timestamp();
        assert!(forecast.list.last().unwrap().dt < end);
    }

    #[test]
    fn forecast_samples_share_day_envelope() {
        let client = SyntheticClient::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let forecast = client.generate_forecast("Lyon", noon(), &mut rng);
            for item in &forecast.list {
                let max = item.main.temp_max.unwrap();
                let min = item.main.temp_min.unwrap();
                assert!(max > min);
                assert!(item.main.temp >= min.floor() && item.main.temp <= max.ceil());
                assert!(DAY_PROFILES.iter().any(|(_, icon, _)| *icon == item.weather[0].icon));
            }
        }
    }

    #[test]
    fn drift_is_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let next = drift(25.0, &HIGH_TEMPERATURE_BOUNDS, &mut rng);
            assert!((24.0..=26.0).contains(&next));

            assert!(drift(40.0, &HIGH_TEMPERATURE_BOUNDS, &mut rng) <= 40.0);
            assert!(drift(5.0, &LOW_TEMPERATURE_BOUNDS, &mut rng) >= 5.0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn responses_arrive_after_configured_delays() {
        let client = SyntheticClient::default();

        let started = tokio::time::Instant::now();
        let current = client.get_current("Turin").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(current.name, "Turin");

        let started = tokio::time::Instant::now();
        let forecast = client.get_forecast("Turin").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert!(started.elapsed() < Duration::from_millis(1000));
        assert!(!forecast.list.is_empty());
    }
}
