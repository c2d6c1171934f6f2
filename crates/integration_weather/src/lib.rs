//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap `data/2.5` API
//! (<https://openweathermap.org/current>, <https://openweathermap.org/forecast5>)
//! plus a synthetic client that generates plausible demo data without any
//! network access. Both return the same wire models.

pub mod client;
mod models;
pub mod synthetic;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{
    CityInfo, CurrentWeatherResponse, ForecastItem, ForecastResponse, MainReadings, SysInfo,
    WeatherDescription, Wind,
};
pub use synthetic::{SyntheticClient, SyntheticConfig};
