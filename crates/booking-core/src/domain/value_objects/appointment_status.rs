//! Appointment status value object.

use crate::BookingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    /// Booked and not yet held.
    #[default]
    Scheduled,
    /// Called off by the client or the specialist.
    Cancelled,
    /// Held.
    Finished,
}

impl AppointmentStatus {
    /// Returns the canonical upper-case name of the status.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Cancelled => "CANCELLED",
            Self::Finished => "FINISHED",
        }
    }

    /// Looks up a status by its canonical name.
    pub fn from_name(name: &str) -> Result<Self, BookingError> {
        Self::all()
            .into_iter()
            .find(|status| status.name() == name)
            .ok_or_else(|| BookingError::status_mismatch(name))
    }

    /// All possible statuses.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Scheduled, Self::Cancelled, Self::Finished]
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
