//! Typed ID wrappers for booking entities.
//!
//! All identifiers are database-assigned 64-bit integers and serialize as
//! plain numbers.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from its raw value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

integer_id!(
    /// A strongly-typed wrapper for appointment IDs.
    AppointmentId
);

integer_id!(
    /// A strongly-typed wrapper for client IDs.
    ClientId
);

integer_id!(
    /// A strongly-typed wrapper for treatment IDs.
    TreatmentId
);

integer_id!(
    /// A strongly-typed wrapper for specialist IDs.
    SpecialistId
);
