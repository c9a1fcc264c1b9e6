//! Core data types for great-circle calculations

use serde::{Deserialize, Serialize};

/// Point on a sphere in geodetic coordinates (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Latitude and longitude converted to radians
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

/// Origin and destination of a single great-circle query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePair {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
}

impl CoordinatePair {
    pub fn new(origin: GeoPoint, destination: GeoPoint) -> Self {
        Self { origin, destination }
    }

    /// Build a pair from raw degrees in (lat, lon, lat, lon) order
    pub fn from_degrees(
        origin_latitude: f64,
        origin_longitude: f64,
        destination_latitude: f64,
        destination_longitude: f64,
    ) -> Self {
        Self {
            origin: GeoPoint::new(origin_latitude, origin_longitude),
            destination: GeoPoint::new(destination_latitude, destination_longitude),
        }
    }

    pub fn is_coincident(&self) -> bool {
        self.origin == self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_point_to_radians() {
        let point = GeoPoint::new(90.0, -180.0);
        let (lat, lon) = point.to_radians();
        assert!((lat - PI / 2.0).abs() < 1e-15);
        assert!((lon + PI).abs() < 1e-15);
    }

    #[test]
    fn test_pair_from_degrees() {
        let pair = CoordinatePair::from_degrees(51.5, -0.1, 48.85, 2.35);
        assert_eq!(pair.origin, GeoPoint::new(51.5, -0.1));
        assert_eq!(pair.destination, GeoPoint::new(48.85, 2.35));
        assert!(!pair.is_coincident());
        assert!(CoordinatePair::new(pair.origin, pair.origin).is_coincident());
    }
}
