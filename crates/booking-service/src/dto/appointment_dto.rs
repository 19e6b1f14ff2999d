//! Appointment-related DTOs.

use booking_core::{AppointmentId, AppointmentStatus, BookingError, ClientId, TreatmentId};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Request to book an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub client_id: ClientId,
    pub treatment_id: TreatmentId,
    /// Wall-clock time with the caller's UTC offset.
    pub date_time: DateTime<FixedOffset>,
}

/// Appointment status as exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiAppointmentStatus {
    Scheduled,
    Cancelled,
    Finished,
}

impl ApiAppointmentStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Cancelled => "CANCELLED",
            Self::Finished => "FINISHED",
        }
    }

    /// Looks up a status by wire name.
    ///
    /// Used where a status arrives as a bare name rather than as an
    /// [`AppointmentStatus`]; fails when no API status carries that name.
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

impl From<AppointmentStatus> for ApiAppointmentStatus {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Scheduled => Self::Scheduled,
            AppointmentStatus::Cancelled => Self::Cancelled,
            AppointmentStatus::Finished => Self::Finished,
        }
    }
}

impl fmt::Display for ApiAppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ApiAppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<&str> for ApiAppointmentStatus {
    type Error = BookingError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::from_name(name)
    }
}

/// Appointment response DTO.
///
/// Every field may be absent; absent fields are left out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AppointmentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment_id: Option<TreatmentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApiAppointmentStatus>,
}
