//! Specialist transfer objects.

use crate::SpecialistId;
use serde::{Deserialize, Serialize};

/// The field a specialist practises in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Specialization {
    pub name: Option<String>,
}

impl Specialization {
    /// Creates a specialization with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// A specialist as seen by the treatment read model.
///
/// The id is absent for specialists that have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecialistEto {
    pub id: Option<SpecialistId>,
    pub specialization: Specialization,
}
