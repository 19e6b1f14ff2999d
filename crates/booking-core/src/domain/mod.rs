//! # Booking Domain
//!
//! Transfer objects exchanged between the booking use cases and the data
//! layer, and the value objects they carry.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
