//! Application error types.

use std::fmt;

use crate::location::LocationError;

/// Errors that can occur during application lifecycle.
#[derive(Debug)]
pub enum AppError {
    /// The location provider reported a failed fix.
    Location(LocationError),

    /// Failed to initialize logging.
    Logging(String),

    /// Configuration error.
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Location(e) => {
                write!(f, "Location acquisition failed: {}", e)
            }
            AppError::Logging(msg) => {
                write!(f, "Failed to initialize logging: {}", msg)
            }
            AppError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Location(e) => Some(e),
            AppError::Logging(_) => None,
            AppError::Config(_) => None,
        }
    }
}

impl From<LocationError> for AppError {
    fn from(e: LocationError) -> Self {
        AppError::Location(e)
    }
}
