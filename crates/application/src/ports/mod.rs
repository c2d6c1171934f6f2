//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod last_place_store;
mod weather_source;

#[cfg(test)]
pub use last_place_store::MockLastPlaceStore;
pub use last_place_store::LastPlaceStore;
#[cfg(test)]
pub use weather_source::MockWeatherSource;
pub use weather_source::{FetchError, WeatherSource};
