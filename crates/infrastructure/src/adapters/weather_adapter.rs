//! Weather adapter - Implements WeatherSource using integration_weather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{FetchError, WeatherSource};
use async_trait::async_trait;
use domain::{
    Condition, CurrentConditions, DomainError, ForecastFeed, Humidity, Place, PlaceQuery,
    WeatherSample, timestamp_from_epoch,
};
use integration_weather::{
    CurrentWeatherResponse, ForecastItem, ForecastResponse, MainReadings, OpenWeatherMapClient,
    SyntheticClient, WeatherClient, WeatherDescription, WeatherError, Wind,
};
use tracing::{debug, info, instrument};

use crate::config::WeatherAppConfig;

/// Adapter turning OpenWeatherMap-shaped responses into domain entities
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &self.client.name())
            .finish()
    }
}

impl WeatherAdapter {
    /// Wrap an existing client
    pub fn new(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Pick the client once from configuration
    ///
    /// The `"demo"` API key selects the synthetic client; anything else the
    /// live OpenWeatherMap client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: &WeatherAppConfig) -> Result<Self, ApplicationError> {
        let client: Arc<dyn WeatherClient> = if config.is_demo() {
            info!("Demo API key configured, using synthetic weather data");
            Arc::new(SyntheticClient::new(config.synthetic_config()))
        } else {
            info!(base_url = %config.base_url, "Using OpenWeatherMap");
            Arc::new(
                OpenWeatherMapClient::new(config.client_config())
                    .map_err(|e| ApplicationError::Internal(e.to_string()))?,
            )
        };
        Ok(Self::new(client))
    }

    /// Map integration weather error to fetch error
    fn map_error(err: WeatherError) -> FetchError {
        match err {
            WeatherError::CityNotFound(place) => FetchError::NotFound(place),
            WeatherError::Unauthorized => FetchError::Unauthorized(err.to_string()),
            WeatherError::ConnectionFailed(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::ServiceUnavailable(_)
            | WeatherError::ParseError(_) => FetchError::Transient(err.to_string()),
        }
    }

    fn malformed(err: &DomainError) -> FetchError {
        FetchError::Transient(format!("malformed payload: {err}"))
    }

    fn map_condition(weather: &[WeatherDescription]) -> Result<Condition, DomainError> {
        weather
            .first()
            .map(|w| Condition::new(w.icon.clone(), w.description.clone()))
            .ok_or_else(|| DomainError::validation("weather condition missing"))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn map_sample(
        dt: i64,
        main: &MainReadings,
        weather: &[WeatherDescription],
        wind: Option<&Wind>,
    ) -> Result<WeatherSample, DomainError> {
        let humidity = main.humidity.unwrap_or_default();
        let pressure = main.pressure.unwrap_or_default();
        if !humidity.is_finite() || !pressure.is_finite() {
            return Err(DomainError::validation("humidity and pressure must be finite"));
        }

        let sample = WeatherSample {
            timestamp: timestamp_from_epoch(dt)?,
            temperature: main.temp,
            feels_like: main.feels_like.unwrap_or(main.temp),
            temp_max: main.temp_max.unwrap_or(main.temp),
            temp_min: main.temp_min.unwrap_or(main.temp),
            humidity: Humidity::saturating(humidity.round().clamp(0.0, 255.0) as u8),
            pressure: pressure.round().clamp(0.0, f64::from(u32::MAX)) as u32,
            wind_speed: wind.map_or(0.0, |w| w.speed),
            condition: Self::map_condition(weather)?,
        };
        sample.validate()?;
        Ok(sample)
    }

    /// Convert a current weather response to domain current conditions
    fn map_current(response: &CurrentWeatherResponse) -> Result<CurrentConditions, DomainError> {
        let sample = Self::map_sample(
            response.dt,
            &response.main,
            &response.weather,
            response.wind.as_ref(),
        )?;
        let place = Place::new(response.name.clone(), response.sys.country.clone());
        Ok(CurrentConditions::new(place, sample))
    }

    fn map_item(item: &ForecastItem) -> Result<WeatherSample, DomainError> {
        Self::map_sample(item.dt, &item.main, &item.weather, item.wind.as_ref())
    }

    /// Convert a forecast response to a validated feed
    fn map_forecast(response: &ForecastResponse) -> Result<ForecastFeed, DomainError> {
        let samples = response
            .list
            .iter()
            .map(Self::map_item)
            .collect::<Result<Vec<_>, _>>()?;
        ForecastFeed::new(samples)
    }
}

#[async_trait]
impl WeatherSource for WeatherAdapter {
    #[instrument(skip(self), fields(client = self.client.name()))]
    async fn current(&self, query: &PlaceQuery) -> Result<CurrentConditions, FetchError> {
        let response = self
            .client
            .get_current(query.as_str())
            .await
            .map_err(Self::map_error)?;

        let current = Self::map_current(&response).map_err(|e| Self::malformed(&e))?;
        debug!(
            place = %current.place.display_name(),
            temperature = current.sample.temperature,
            "Retrieved current conditions"
        );
        Ok(current)
    }

    #[instrument(skip(self), fields(client = self.client.name()))]
    async fn forecast(&self, query: &PlaceQuery) -> Result<ForecastFeed, FetchError> {
        let response = self
            .client
            .get_forecast(query.as_str())
            .await
            .map_err(Self::map_error)?;

        let feed = Self::map_forecast(&response).map_err(|e| Self::malformed(&e))?;
        debug!(samples = feed.len(), "Retrieved forecast");
        Ok(feed)
    }

    fn name(&self) -> &'static str {
        self.client.name()
    }
}
