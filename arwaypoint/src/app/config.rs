//! Application configuration for the waypoint session.
//!
//! The target location is a build-time constant, intended to be edited
//! per deployment. No config file or environment variable is read for
//! it; CLI flags only ever configure the simulated provider.

use crate::geo::{
    Coordinate, Region, DEFAULT_LATITUDE_DELTA, DEFAULT_LONGITUDE_DELTA, PROXIMITY_THRESHOLD_KM,
};
use crate::location::FixOptions;
use crate::session::SessionConfig;

/// The fixed target location ("Hello World" location).
///
/// Replace the coordinates per deployment.
pub const TARGET_LOCATION: Region = Region {
    center: Coordinate {
        latitude: 37.7749,
        longitude: -122.4194,
    },
    latitude_delta: DEFAULT_LATITUDE_DELTA,
    longitude_delta: DEFAULT_LONGITUDE_DELTA,
};

/// Top-level application configuration.
///
/// Combines the target, the fix request options, and the proximity
/// threshold into one surface so all components are configured
/// consistently.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// The fixed target the session measures distance against.
    pub target: Region,
    /// Options for the one-shot fix request.
    pub fix_options: FixOptions,
    /// Distance below which the AR entry point is offered, in km.
    pub proximity_threshold_km: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target: TARGET_LOCATION,
            fix_options: FixOptions::default(),
            proximity_threshold_km: PROXIMITY_THRESHOLD_KM,
        }
    }
}

impl AppConfig {
    /// Create a config with default fix options and threshold.
    pub fn new(target: Region) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Set the fix request options.
    pub fn with_fix_options(mut self, fix_options: FixOptions) -> Self {
        self.fix_options = fix_options;
        self
    }

    /// Set the proximity threshold.
    pub fn with_proximity_threshold_km(mut self, threshold_km: f64) -> Self {
        self.proximity_threshold_km = threshold_km;
        self
    }

    /// Derive the session configuration.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.target).with_proximity_threshold_km(self.proximity_threshold_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_target_location_constant() {
        assert_eq!(TARGET_LOCATION.center.latitude, 37.7749);
        assert_eq!(TARGET_LOCATION.center.longitude, -122.4194);
        assert_eq!(TARGET_LOCATION.latitude_delta, 0.0922);
        assert_eq!(TARGET_LOCATION.longitude_delta, 0.0421);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.target, TARGET_LOCATION);
        assert_eq!(config.proximity_threshold_km, 0.1);
        assert_eq!(config.fix_options.timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_session_config_derivation() {
        let config = AppConfig::default().with_proximity_threshold_km(0.25);
        let session = config.session_config();
        assert_eq!(session.proximity_threshold_km, 0.25);
        assert_eq!(session.target, TARGET_LOCATION);
    }
}
