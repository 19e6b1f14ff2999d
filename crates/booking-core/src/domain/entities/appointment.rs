//! Appointment transfer objects.

use crate::{AppointmentId, AppointmentStatus, ClientEto, ClientId, SpecialistId, TreatmentCto, TreatmentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An appointment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentEto {
    pub id: AppointmentId,
    pub date_time: DateTime<Utc>,
    pub status: AppointmentStatus,
}

/// Read-side aggregate of an appointment with its client and treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCto {
    pub appointment: AppointmentEto,
    pub client: ClientEto,
    pub treatment: TreatmentCto,
}

/// Intent to book an appointment, consumed by the booking use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentBookingEto {
    pub client_id: ClientId,
    pub treatment_id: TreatmentId,
    /// Only read by the conflict check, which can take the specialist from
    /// the treatment instead.
    pub specialist_id: SpecialistId,
    pub date_time: DateTime<Utc>,
}
