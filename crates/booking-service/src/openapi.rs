//! OpenAPI schema components for the booking API models.
//!
//! The hosting HTTP layer merges these into its own document.

use crate::dto::{
    ApiAppointmentStatus, Appointment, AppointmentRequest, Treatment, TreatmentDetails,
    TreatmentDetailsSpecialist, TreatmentRequest,
};
use booking_core::{AppointmentId, ClientId, ErrorResponse, SpecialistId, TreatmentId};
use utoipa::OpenApi;

/// OpenAPI components for the appointment booking API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Appointment Booking API",
        version = "1.0.0",
        description = "API models of the appointment booking service"
    ),
    components(
        schemas(
            // Core types
            AppointmentId,
            ClientId,
            TreatmentId,
            SpecialistId,
            ErrorResponse,
            // Appointment DTOs
            AppointmentRequest,
            Appointment,
            ApiAppointmentStatus,
            // Treatment DTOs
            TreatmentRequest,
            Treatment,
            TreatmentDetails,
            TreatmentDetailsSpecialist,
        )
    ),
    tags(
        (name = "appointments", description = "Appointment booking"),
        (name = "treatments", description = "Treatment catalogue")
    )
)]
pub struct MappingSchemas;
