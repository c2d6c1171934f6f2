//! Value Objects - Immutable, identity-less domain primitives

mod humidity;
mod place_query;
mod timezone;
mod unit_system;

pub use humidity::Humidity;
pub use place_query::PlaceQuery;
pub use timezone::Timezone;
pub use unit_system::UnitSystem;
