//! Mappers between API models and internal transfer objects.
//!
//! Mappers are stateless; one instance can serve any number of concurrent
//! requests.

mod appointment_mapper;
mod treatment_mapper;

pub use appointment_mapper::*;
pub use treatment_mapper::*;
