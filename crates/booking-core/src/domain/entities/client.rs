//! Client transfer object.

use crate::ClientId;
use serde::{Deserialize, Serialize};

/// A client as seen by the appointment read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEto {
    pub id: ClientId,
}

impl ClientEto {
    #[must_use]
    pub const fn new(id: ClientId) -> Self {
        Self { id }
    }
}
