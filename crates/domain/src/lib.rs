//! Domain layer for Skycast
//!
//! Contains the weather vocabulary (samples, feeds, daily summaries), the
//! forecast aggregation rules, value objects, and domain errors.
//! This layer performs no I/O.

pub mod aggregation;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use aggregation::{DEFAULT_FORECAST_DAYS, ForecastAggregator};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
