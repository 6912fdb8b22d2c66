//! Geographic math module
//!
//! Provides the great-circle distance calculation between WGS84
//! coordinates and the proximity threshold used to gate the AR entry
//! point.

mod types;

pub use types::{Coordinate, Region, DEFAULT_LATITUDE_DELTA, DEFAULT_LONGITUDE_DELTA};

/// Mean Earth radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance below which the AR entry point is offered, in kilometers.
///
/// The boundary is exclusive: a distance of exactly 0.1 km does not
/// activate the AR entry point.
pub const PROXIMITY_THRESHOLD_KM: f64 = 0.1;

/// Computes the great-circle distance between two coordinates.
///
/// Uses the haversine formula with a mean Earth radius of 6371 km.
/// Inputs are expected to be valid degree values (±90 / ±180); no
/// validation or clamping is performed. The result is non-negative,
/// zero for coincident points, and approaches half the Earth's
/// circumference (≈20015 km) for antipodal points.
///
/// # Arguments
///
/// * `a` - First coordinate in degrees
/// * `b` - Second coordinate in degrees
///
/// # Returns
///
/// The distance in kilometers.
#[inline]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Whether a distance falls within the AR activation threshold.
///
/// Strictly less than [`PROXIMITY_THRESHOLD_KM`]; the boundary itself
/// is outside.
#[inline]
pub fn within_proximity(distance_km: f64) -> bool {
    distance_km < PROXIMITY_THRESHOLD_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAN_FRANCISCO: Coordinate = Coordinate {
        latitude: 37.7749,
        longitude: -122.4194,
    };
    const LOS_ANGELES: Coordinate = Coordinate {
        latitude: 34.0522,
        longitude: -118.2437,
    };

    #[test]
    fn test_distance_coincident_points_is_zero() {
        assert_eq!(distance_km(SAN_FRANCISCO, SAN_FRANCISCO), 0.0);
    }

    #[test]
    fn test_distance_san_francisco_to_los_angeles() {
        // Known reference: ~559 km, within 1%
        let d = distance_km(SAN_FRANCISCO, LOS_ANGELES);
        assert!(
            (d - 559.0).abs() / 559.0 < 0.01,
            "Expected ~559 km, got {} km",
            d
        );
    }

    #[test]
    fn test_distance_symmetric() {
        let ab = distance_km(SAN_FRANCISCO, LOS_ANGELES);
        let ba = distance_km(LOS_ANGELES, SAN_FRANCISCO);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_distance_point_100m_north_of_target() {
        // +0.0009° latitude is approximately 100 m at any longitude
        let nearby = Coordinate::new(SAN_FRANCISCO.latitude + 0.0009, SAN_FRANCISCO.longitude);
        let d = distance_km(SAN_FRANCISCO, nearby);
        assert!(
            (d - 0.1).abs() < 0.001,
            "Expected ~0.1 km, got {} km",
            d
        );
    }

    #[test]
    fn test_distance_antipodal_points() {
        // Antipodes are half the Earth's circumference apart
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = distance_km(a, b);
        assert!(
            (d - 20015.0).abs() < 1.0,
            "Expected ~20015 km, got {} km",
            d
        );
    }

    #[test]
    fn test_proximity_boundary_is_exclusive() {
        assert!(within_proximity(0.0999));
        assert!(!within_proximity(0.1));
        assert!(!within_proximity(0.1001));
    }

    #[test]
    fn test_proximity_zero_distance() {
        assert!(within_proximity(0.0));
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_distance_to_self_is_zero(
                lat in -90.0..90.0_f64,
                lon in -180.0..180.0_f64
            ) {
                let p = Coordinate::new(lat, lon);
                prop_assert_eq!(distance_km(p, p), 0.0);
            }

            #[test]
            fn test_distance_is_symmetric(
                lat1 in -90.0..90.0_f64,
                lon1 in -180.0..180.0_f64,
                lat2 in -90.0..90.0_f64,
                lon2 in -180.0..180.0_f64
            ) {
                let a = Coordinate::new(lat1, lon1);
                let b = Coordinate::new(lat2, lon2);
                let ab = distance_km(a, b);
                let ba = distance_km(b, a);
                prop_assert!(
                    (ab - ba).abs() < 1e-9,
                    "Asymmetric: {} vs {}",
                    ab, ba
                );
            }

            #[test]
            fn test_distance_is_non_negative_and_bounded(
                lat1 in -90.0..90.0_f64,
                lon1 in -180.0..180.0_f64,
                lat2 in -90.0..90.0_f64,
                lon2 in -180.0..180.0_f64
            ) {
                let d = distance_km(
                    Coordinate::new(lat1, lon1),
                    Coordinate::new(lat2, lon2),
                );
                prop_assert!(d >= 0.0, "Negative distance: {}", d);
                // Half the Earth's circumference, with a little slack
                prop_assert!(d <= 20016.0, "Distance {} exceeds antipodal bound", d);
            }

            #[test]
            fn test_triangle_inequality(
                lat1 in -80.0..80.0_f64,
                lon1 in -170.0..170.0_f64,
                lat2 in -80.0..80.0_f64,
                lon2 in -170.0..170.0_f64,
                lat3 in -80.0..80.0_f64,
                lon3 in -170.0..170.0_f64
            ) {
                let a = Coordinate::new(lat1, lon1);
                let b = Coordinate::new(lat2, lon2);
                let c = Coordinate::new(lat3, lon3);
                let ab = distance_km(a, b);
                let bc = distance_km(b, c);
                let ac = distance_km(a, c);
                prop_assert!(
                    ac <= ab + bc + 1e-6,
                    "Triangle inequality violated: {} > {} + {}",
                    ac, ab, bc
                );
            }
        }
    }
}
