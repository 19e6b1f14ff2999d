//! Treatment-related DTOs.

use booking_core::{SpecialistId, TreatmentId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a treatment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist_id: Option<SpecialistId>,
}

/// Treatment summary response DTO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TreatmentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist_id: Option<SpecialistId>,
}

/// Specialist summary nested in [`TreatmentDetails`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentDetailsSpecialist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SpecialistId>,
    /// Name of the specialist's specialization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Treatment details response DTO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TreatmentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist_id: Option<SpecialistId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist: Option<TreatmentDetailsSpecialist>,
}
