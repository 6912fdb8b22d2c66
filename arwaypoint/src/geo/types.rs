//! Geographic primitive types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default latitude span for map framing, in degrees.
pub const DEFAULT_LATITUDE_DELTA: f64 = 0.0922;

/// Default longitude span for map framing, in degrees.
pub const DEFAULT_LONGITUDE_DELTA: f64 = 0.0421;

/// A geographic point in WGS84 degrees.
///
/// Latitude is positive north, longitude positive east. The type performs
/// no validation; callers are expected to supply in-range degree values
/// (±90 / ±180).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_hem = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let lon_hem = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude.abs(),
            lat_hem,
            self.longitude.abs(),
            lon_hem
        )
    }
}

/// A map viewport descriptor: a center point plus a latitude/longitude span.
///
/// Used only for initial map framing. Immutable once captured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Center of the viewport.
    pub center: Coordinate,
    /// Latitude span in degrees.
    pub latitude_delta: f64,
    /// Longitude span in degrees.
    pub longitude_delta: f64,
}

impl Region {
    /// Create a region with an explicit span.
    pub fn new(center: Coordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Create a region around a point with the default map framing span.
    pub fn with_default_span(center: Coordinate) -> Self {
        Self::new(center, DEFAULT_LATITUDE_DELTA, DEFAULT_LONGITUDE_DELTA)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Δlat {:.4}°, Δlon {:.4}°)",
            self.center, self.latitude_delta, self.longitude_delta
        )
    }
}
