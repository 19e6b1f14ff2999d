//! Entity and composite transfer objects.

mod appointment;
mod client;
mod specialist;
mod treatment;

pub use appointment::*;
pub use client::*;
pub use specialist::*;
pub use treatment::*;
