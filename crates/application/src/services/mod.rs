//! Application services - Use case implementations

mod search_service;
mod weather_service;

pub use search_service::{SearchOutcome, SearchService};
pub use weather_service::{WeatherReport, WeatherService};
