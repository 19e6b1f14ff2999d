//! Result type aliases for the booking service.

use crate::BookingError;

/// A specialized `Result` type for booking operations.
pub type BookingResult<T> = Result<T, BookingError>;
