//! Treatment mapper.

use crate::dto::{Treatment, TreatmentDetails, TreatmentDetailsSpecialist, TreatmentRequest};
use booking_core::{TreatmentCreationTo, TreatmentCto};
use tracing::trace;

/// Description put on every new treatment; requests do not carry one.
// TODO: remove once `TreatmentRequest` carries a description and it is
// copied into `TreatmentCreationTo`.
pub const DEFAULT_TREATMENT_DESCRIPTION: &str = "Default description";

/// Maps treatment API models to and from internal transfer objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreatmentApiMapper;

impl TreatmentApiMapper {
    /// Creates a new treatment mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a creation request to a creation intent.
    ///
    /// A missing duration becomes zero minutes. The description is always
    /// [`DEFAULT_TREATMENT_DESCRIPTION`].
    #[must_use]
    pub fn to_creation_to(&self, request: &TreatmentRequest) -> TreatmentCreationTo {
        trace!(name = ?request.name, "Mapping treatment creation request");

        TreatmentCreationTo {
            name: request.name.clone(),
            duration_minutes: request.duration.unwrap_or(0),
            specialist_id: request.specialist_id,
            description: DEFAULT_TREATMENT_DESCRIPTION.to_string(),
        }
    }

    /// Maps a treatment read model to its summary representation.
    #[must_use]
    pub fn to_api_treatment(&self, cto: &TreatmentCto) -> Treatment {
        trace!(treatment_id = ?cto.treatment.id, "Mapping treatment");

        Treatment {
            id: cto.treatment.id,
            name: cto.treatment.name.clone(),
            duration: Some(cto.treatment.duration_minutes),
            specialist_id: cto.specialist.id,
        }
    }

    /// Maps a treatment read model to its detailed representation, which
    /// also carries a summary of the specialist.
    #[must_use]
    pub fn to_api_treatment_details(&self, cto: &TreatmentCto) -> TreatmentDetails {
        let Treatment {
            id,
            name,
            duration,
            specialist_id,
        } = self.to_api_treatment(cto);

        TreatmentDetails {
            id,
            name,
            duration,
            specialist_id,
            specialist: Some(TreatmentDetailsSpecialist {
                id: cto.specialist.id,
                name: cto.specialist.specialization.name.clone(),
            }),
        }
    }
}
