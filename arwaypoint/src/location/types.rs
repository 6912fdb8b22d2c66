//! Core types for location acquisition.

use std::time::Duration;

use thiserror::Error;

use crate::geo::Coordinate;

/// Error code reported when the platform denies location access.
pub const CODE_PERMISSION_DENIED: i32 = 1;

/// Error code reported when no position can be determined.
pub const CODE_POSITION_UNAVAILABLE: i32 = 2;

/// Error code reported when the fix does not arrive within the timeout.
pub const CODE_TIMEOUT: i32 = 3;

/// Options for a one-shot position fix request.
#[derive(Debug, Clone, PartialEq)]
pub struct FixOptions {
    /// Request high-accuracy positioning from the platform.
    pub high_accuracy: bool,
    /// How long to wait for a fix before giving up.
    pub timeout: Duration,
    /// Maximum acceptable age of a cached fix.
    pub maximum_age: Duration,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(20),
            maximum_age: Duration::from_secs(1),
        }
    }
}

impl FixOptions {
    /// Set the fix timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum cached-fix age.
    pub fn with_maximum_age(mut self, maximum_age: Duration) -> Self {
        self.maximum_age = maximum_age;
        self
    }

    /// Enable or disable high-accuracy mode.
    pub fn with_high_accuracy(mut self, high_accuracy: bool) -> Self {
        self.high_accuracy = high_accuracy;
        self
    }
}

/// A successful position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    /// The position reported by the provider.
    pub coordinate: Coordinate,
}

impl Fix {
    /// Create a fix at the given coordinate.
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

/// A failed position fix.
///
/// This is the only modeled location error kind: a numeric platform
/// code plus a human-readable message. It is logged and recorded but
/// never retried or surfaced as error UI.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("location fix failed (code {code}): {message}")]
pub struct LocationError {
    /// Platform error code.
    pub code: i32,
    /// Human-readable description.
    pub message: String,
}

impl LocationError {
    /// Create a new location error.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The timeout error produced when no fix arrives in time.
    pub fn timeout(timeout: Duration) -> Self {
        Self::new(
            CODE_TIMEOUT,
            format!("no fix within {} ms", timeout.as_millis()),
        )
    }
}
