//! Weather source configuration.

use std::time::Duration;

use domain::{DEFAULT_FORECAST_DAYS, ForecastAggregator, Timezone, UnitSystem};
use integration_weather::{SyntheticConfig, WeatherConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// API key value that selects the synthetic weather source
pub const DEMO_API_KEY: &str = "demo";

/// Weather source and forecast settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API key, `"demo"` for synthetic data
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: SecretString,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Units requested from the API
    #[serde(default)]
    pub units: UnitSystem,

    /// Language for condition descriptions
    #[serde(default = "default_language")]
    pub language: String,

    /// Place searched when nothing was searched before
    #[serde(default = "default_place")]
    pub default_place: String,

    /// IANA timezone used to split the forecast into days
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Number of daily summaries to show (1-5)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// HTTP timeout for the live API
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Synthetic current-conditions delay
    #[serde(default = "default_current_delay_ms")]
    pub current_delay_ms: u64,

    /// Synthetic forecast delay
    #[serde(default = "default_forecast_delay_ms")]
    pub forecast_delay_ms: u64,
}

fn default_api_key() -> SecretString {
    SecretString::from(DEMO_API_KEY)
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_place() -> String {
    "London".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

#[allow(clippy::cast_possible_truncation)]
const fn default_forecast_days() -> u8 {
    DEFAULT_FORECAST_DAYS as u8
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_current_delay_ms() -> u64 {
    1000
}

const fn default_forecast_delay_ms() -> u64 {
    500
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            units: UnitSystem::default(),
            language: default_language(),
            default_place: default_place(),
            timezone: default_timezone(),
            forecast_days: default_forecast_days(),
            timeout_secs: default_timeout_secs(),
            current_delay_ms: default_current_delay_ms(),
            forecast_delay_ms: default_forecast_delay_ms(),
        }
    }
}

impl WeatherAppConfig {
    /// Whether the synthetic source should be used
    pub fn is_demo(&self) -> bool {
        self.api_key.expose_secret() == DEMO_API_KEY
    }

    /// API key safe for display: first and last two characters only
    pub fn masked_api_key(&self) -> String {
        let key = self.api_key.expose_secret();
        if self.is_demo() {
            return DEMO_API_KEY.to_string();
        }
        let chars: Vec<char> = key.chars().collect();
        if chars.len() <= 6 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{head}{}{tail}", "*".repeat(chars.len() - 4))
    }

    /// Parsed aggregation timezone
    ///
    /// # Errors
    ///
    /// Returns the domain error for unknown zone names.
    pub fn timezone(&self) -> Result<Timezone, domain::DomainError> {
        Timezone::parse(&self.timezone)
    }

    /// Forecast aggregator for the configured timezone and day count
    ///
    /// # Errors
    ///
    /// Returns the domain error for unknown zone names.
    pub fn aggregator(&self) -> Result<ForecastAggregator, domain::DomainError> {
        Ok(ForecastAggregator::new(self.timezone()?.tz())
            .with_max_days(usize::from(self.forecast_days)))
    }

    /// Configuration for the live OpenWeatherMap client
    pub fn client_config(&self) -> WeatherConfig {
        WeatherConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            units: self.units,
            language: self.language.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Configuration for the synthetic client
    ///
    /// An unknown zone falls back to UTC here; [`Self::aggregator`] reports it.
    pub fn synthetic_config(&self) -> SyntheticConfig {
        SyntheticConfig {
            current_delay: Duration::from_millis(self.current_delay_ms),
            forecast_delay: Duration::from_millis(self.forecast_delay_ms),
            forecast_days: u32::from(self.forecast_days),
            timezone: self.timezone().map_or(chrono_tz::Tz::UTC, Timezone::tz),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_demo_mode() {
        let config = WeatherAppConfig::default();
        assert!(config.is_demo());
        assert_eq!(config.masked_api_key(), "demo");
        assert_eq!(config.default_place, "London");
        assert_eq!(config.forecast_days, 5);
    }

    #[test]
    fn masked_key_hides_middle() {
        let config = WeatherAppConfig {
            api_key: SecretString::from("abcdef123456"),
            ..WeatherAppConfig::default()
        };
        assert!(!config.is_demo());
        assert_eq!(config.masked_api_key(), "ab********56");
    }

    #[test]
    fn short_key_is_fully_masked() {
        let config = WeatherAppConfig {
            api_key: SecretString::from("abc"),
            ..WeatherAppConfig::default()
        };
        assert_eq!(config.masked_api_key(), "***");
    }

    #[test]
    fn aggregator_uses_configured_zone_and_days() {
        let config = WeatherAppConfig {
            timezone: "Asia/Tokyo".to_string(),
            forecast_days: 3,
            ..WeatherAppConfig::default()
        };
        let aggregator = config.aggregator().unwrap();
        assert_eq!(aggregator.timezone(), chrono_tz::Tz::Asia__Tokyo);
        assert_eq!(aggregator.max_days(), 3);
    }

    #[test]
    fn synthetic_config_uses_delays() {
        let config = WeatherAppConfig {
            current_delay_ms: 10,
            forecast_delay_ms: 5,
            ..WeatherAppConfig::default()
        };
        let synthetic = config.synthetic_config();
        assert_eq!(synthetic.current_delay, Duration::from_millis(10));
        assert_eq!(synthetic.forecast_delay, Duration::from_millis(5));
        assert_eq!(synthetic.timezone, chrono_tz::Tz::UTC);
    }

    #[test]
    fn synthetic_config_follows_configured_zone() {
        let config = WeatherAppConfig {
            timezone: "Asia/Tokyo".to_string(),
            forecast_days: 3,
            ..WeatherAppConfig::default()
        };
        let synthetic = config.synthetic_config();
        assert_eq!(synthetic.timezone, chrono_tz::Tz::Asia__Tokyo);
        assert_eq!(synthetic.forecast_days, 3);
    }

    #[test]
    fn serialization_omits_api_key() {
        let config = WeatherAppConfig {
            api_key: SecretString::from("top-secret-key"),
            ..WeatherAppConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("top-secret-key"));
    }
}
