//! Treatment transfer objects.

use crate::{SpecialistEto, SpecialistId, TreatmentId};
use serde::{Deserialize, Serialize};

/// A treatment row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreatmentEto {
    pub id: Option<TreatmentId>,
    pub name: Option<String>,
    pub duration_minutes: i32,
}

/// Read-side aggregate of a treatment and the specialist performing it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreatmentCto {
    pub treatment: TreatmentEto,
    pub specialist: SpecialistEto,
}

impl TreatmentCto {
    /// Returns the treatment id, if the treatment has been persisted.
    #[must_use]
    pub const fn treatment_id(&self) -> Option<TreatmentId> {
        self.treatment.id
    }
}

/// Intent to create a new treatment, consumed by the treatment use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentCreationTo {
    pub name: Option<String>,
    pub duration_minutes: i32,
    pub specialist_id: Option<SpecialistId>,
    pub description: String,
}
