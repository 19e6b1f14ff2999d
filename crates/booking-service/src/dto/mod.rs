//! Data Transfer Objects (DTOs).

mod appointment_dto;
mod treatment_dto;

pub use appointment_dto::*;
pub use treatment_dto::*;
