//! Application layer - Use cases and orchestration
//!
//! Defines the ports weather sources and last-place persistence must
//! implement, and the services that orchestrate them: concurrent fetching
//! of current conditions and forecast, and the search flow built on top.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
