//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the weather source
//! over the OpenWeatherMap and synthetic clients, and last-place
//! persistence. Also owns configuration loading and logging setup.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::WeatherAdapter;
pub use bootstrap::build_search_service;
pub use config::{AppConfig, ConfigError, ServerConfig, StorageConfig, WeatherAppConfig};
pub use persistence::{FileLastPlaceStore, InMemoryLastPlaceStore};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
