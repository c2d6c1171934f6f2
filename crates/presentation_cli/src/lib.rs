//! Skycast CLI
//!
//! Argument parsing, terminal rendering and the demo-mode live update loop
//! used by the `skycast` binary.

pub mod cli;
pub mod render;
pub mod watch;

pub use cli::{Cli, Commands, log_filter_from_verbosity};
