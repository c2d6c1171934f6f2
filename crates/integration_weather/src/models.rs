//! OpenWeatherMap API wire models
//!
//! Only the fields Skycast consumes are modelled. Optional fields are
//! tolerated as missing because the synthetic client and some API plans
//! omit them.

use serde::{Deserialize, Serialize};

/// Response of `GET /weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    /// Resolved place name
    pub name: String,
    #[serde(default)]
    pub sys: SysInfo,
    /// Observation time, unix seconds
    pub dt: i64,
    /// Shift from UTC in seconds
    #[serde(default)]
    pub timezone: i64,
    pub weather: Vec<WeatherDescription>,
    pub main: MainReadings,
    #[serde(default)]
    pub wind: Option<Wind>,
}

/// `sys` block of the current weather response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysInfo {
    #[serde(default)]
    pub country: Option<String>,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDescription {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub main: Option<String>,
    pub description: String,
    /// Icon code such as `"10d"`
    pub icon: String,
}

/// `main` block shared by current and forecast responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
    /// hPa
    #[serde(default)]
    pub pressure: Option<f64>,
    /// Percent
    #[serde(default)]
    pub humidity: Option<f64>,
}

/// `wind` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    #[serde(default)]
    pub deg: Option<f64>,
}

/// Response of `GET /forecast` (5 day / 3 hour)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
    #[serde(default)]
    pub city: Option<CityInfo>,
}

/// A single 3-hourly forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastItem {
    /// Forecast time, unix seconds
    pub dt: i64,
    pub main: MainReadings,
    pub weather: Vec<WeatherDescription>,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub dt_txt: Option<String>,
}

/// `city` block of the forecast response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityInfo {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub timezone: Option<i64>,
}
