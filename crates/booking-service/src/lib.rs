//! # Booking Service
//!
//! API models for the appointment booking service and the mappers that
//! translate between them and the internal transfer objects.

pub mod dto;
pub mod mappers;
pub mod openapi;
pub mod registry;

pub use dto::*;
pub use mappers::*;
pub use registry::*;
