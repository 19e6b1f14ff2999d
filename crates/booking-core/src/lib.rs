//! # Booking Core
//!
//! Core types, transfer objects, and error definitions for the appointment
//! booking service. The records in [`domain`] are what the use-case and data
//! layers exchange; the service crate maps them to and from API models.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
