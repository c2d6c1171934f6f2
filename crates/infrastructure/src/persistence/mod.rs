//! Persistence module
//!
//! Storage for the last searched place: a JSON file for the binaries and an
//! in-memory variant for tests.

mod file_store;
mod memory_store;

pub use file_store::FileLastPlaceStore;
pub use memory_store::InMemoryLastPlaceStore;
