//! Appointment mapper.

use crate::dto::{Appointment, AppointmentRequest};
use booking_core::{AppointmentBookingEto, AppointmentCto, SpecialistId};
use chrono::Utc;
use tracing::trace;

/// Specialist id put on every booking intent.
///
/// The request does not name a specialist.
// TODO: remove together with `AppointmentBookingEto::specialist_id` once the
// conflict check reads the specialist from the treatment.
pub const UNRESOLVED_SPECIALIST_ID: SpecialistId = SpecialistId(0);

/// Maps appointment API models to and from internal transfer objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentApiMapper;

impl AppointmentApiMapper {
    /// Creates a new appointment mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a booking request to a booking intent.
    ///
    /// The request's wall-clock time is normalised to UTC.
    #[must_use]
    pub fn to_booking_eto(&self, request: &AppointmentRequest) -> AppointmentBookingEto {
        trace!(
            client_id = %request.client_id,
            treatment_id = %request.treatment_id,
            "Mapping booking request"
        );

        AppointmentBookingEto {
            client_id: request.client_id,
            treatment_id: request.treatment_id,
            specialist_id: UNRESOLVED_SPECIALIST_ID,
            date_time: request.date_time.with_timezone(&Utc),
        }
    }

    /// Maps an appointment read model to its API representation.
    #[must_use]
    pub fn to_api_appointment(&self, cto: &AppointmentCto) -> Appointment {
        let appointment = &cto.appointment;
        trace!(appointment_id = %appointment.id, "Mapping appointment");

        Appointment {
            id: Some(appointment.id),
            client_id: Some(cto.client.id),
            treatment_id: cto.treatment.treatment_id(),
            date_time: Some(appointment.date_time),
            status: Some(appointment.status.into()),
        }
    }
}
