//! # Booking Config
//!
//! Configuration management for the appointment booking service.
//! Supports layered configuration from files and environment variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
