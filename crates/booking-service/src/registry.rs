//! Mapper registry handed to the hosting application at startup.

use crate::mappers::{AppointmentApiMapper, TreatmentApiMapper};
use booking_config::AppConfig;
use booking_core::telemetry::init_telemetry;
use booking_core::BookingResult;
use tracing::info;

/// The mappers of the service layer.
///
/// Built once during startup. The mappers hold no state, so copies are free
/// and can be shared across request handlers without synchronisation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceMappers {
    appointments: AppointmentApiMapper,
    treatments: TreatmentApiMapper,
}

impl ServiceMappers {
    /// Creates the registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            appointments: AppointmentApiMapper::new(),
            treatments: TreatmentApiMapper::new(),
        }
    }

    /// Initializes logging from `config` and creates the registry.
    pub fn bootstrap(config: &AppConfig) -> BookingResult<Self> {
        init_telemetry(&config.observability)?;

        let mappers = Self::new();
        info!(
            app = %config.app.name,
            environment = %config.app.environment,
            "Registered appointment and treatment mappers"
        );
        Ok(mappers)
    }

    /// Returns the appointment mapper.
    #[must_use]
    pub const fn appointments(&self) -> &AppointmentApiMapper {
        &self.appointments
    }

    /// Returns the treatment mapper.
    #[must_use]
    pub const fn treatments(&self) -> &TreatmentApiMapper {
        &self.treatments
    }
}
