//! Initial bearing from the spherical-triangle cosine and sine rules

use crate::core::{CoordinatePair, AZIMUTH_DEGENERACY_EPSILON};
use crate::validation::ComputationError;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// How a latitude (radians) is turned into the colatitude the triangle uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AzimuthConvention {
    /// `π/2 − lat`
    #[default]
    Spherical,
    /// `90 − lat`, with `lat` already in radians. Kept so results can be
    /// compared with services that still compute it this way.
    Legacy,
}

impl AzimuthConvention {
    pub fn colatitude(self, latitude_rad: f64) -> f64 {
        match self {
            AzimuthConvention::Spherical => FRAC_PI_2 - latitude_rad,
            AzimuthConvention::Legacy => 90.0 - latitude_rad,
        }
    }
}

/// Initial azimuth (radians) from origin to destination.
///
/// With colatitudes `p1`, `p2` and `Δlon = lon2 − lon1`, the side `b` of the
/// polar triangle satisfies
/// `cos(b) = cos(p2)·cos(p1) + sin(p2)·sin(p1)·cos(Δlon)` and the bearing is
/// `asin(sin(p2)·sin(Δlon) / sin(b))`, so the result lies in [-π/2, π/2].
///
/// `sin(b)` is taken from the cross-product magnitude of the two unit vectors
/// rather than from `sin(acos(..))`, which loses about half the significant
/// digits when the points nearly coincide.
///
/// Returns [`ComputationError::DegenerateAzimuth`] when `sin(b)` vanishes:
/// the points coincide or are antipodal.
pub fn initial_azimuth(pair: &CoordinatePair, convention: AzimuthConvention) -> Result<f64, ComputationError> {
    let (lat1, lon1) = pair.origin.to_radians();
    let (lat2, lon2) = pair.destination.to_radians();

    let p1 = convention.colatitude(lat1);
    let p2 = convention.colatitude(lat2);
    let lon_delta = lon2 - lon1;

    let cos_b = p2.cos() * p1.cos() + p2.sin() * p1.sin() * lon_delta.cos();
    let cross = ((p2.sin() * lon_delta.sin()).powi(2)
        + (p1.sin() * p2.cos() - p1.cos() * p2.sin() * lon_delta.cos()).powi(2))
    .sqrt();
    let b = cross.atan2(cos_b.clamp(-1.0, 1.0));
    let sin_b = b.sin();

    if sin_b.abs() < AZIMUTH_DEGENERACY_EPSILON {
        return Err(ComputationError::DegenerateAzimuth { sin_b });
    }

    let ratio = p2.sin() * lon_delta.sin() / sin_b;
    let azimuth = ratio.clamp(-1.0, 1.0).asin();

    if !azimuth.is_finite() {
        return Err(ComputationError::NonFiniteResult {
            operation: "azimuth".to_string(),
        });
    }

    Ok(azimuth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn pair(a: f64, b: f64, c: f64, d: f64) -> CoordinatePair {
        CoordinatePair::from_degrees(a, b, c, d)
    }

    #[test]
    fn test_due_east_and_west() {
        let east = initial_azimuth(&pair(0.0, 0.0, 0.0, 90.0), AzimuthConvention::Spherical).unwrap();
        assert!((east - PI / 2.0).abs() < 1e-9, "Azimuth was {}", east);

        let west = initial_azimuth(&pair(0.0, 0.0, 0.0, -90.0), AzimuthConvention::Spherical).unwrap();
        assert!((west + PI / 2.0).abs() < 1e-9, "Azimuth was {}", west);
    }

    #[test]
    fn test_along_meridian_is_zero() {
        let north = initial_azimuth(&pair(10.0, 20.0, 40.0, 20.0), AzimuthConvention::Spherical).unwrap();
        assert!(north.abs() < 1e-12);
    }

    #[test]
    fn test_matches_cosine_rule() {
        let input = pair(51.5, -0.1, 48.85, 2.35);
        let azimuth = initial_azimuth(&input, AzimuthConvention::Spherical).unwrap();

        let (lat1, lon1) = input.origin.to_radians();
        let (lat2, lon2) = input.destination.to_radians();
        let (p1, p2) = (PI / 2.0 - lat1, PI / 2.0 - lat2);
        let b = (p2.cos() * p1.cos() + p2.sin() * p1.sin() * (lon2 - lon1).cos()).acos();
        let expected = (p2.sin() * (lon2 - lon1).sin() / b.sin()).asin();

        assert!((azimuth - expected).abs() < 1e-9);
        // London to Paris heads south-east: positive (eastward) component
        assert!(azimuth > 0.0);
    }

    #[test]
    fn test_legacy_convention_reproduces_mixed_units() {
        let input = pair(0.0, 0.0, 0.0, 90.0);
        let azimuth = initial_azimuth(&input, AzimuthConvention::Legacy).unwrap();

        let (lat1, lon1) = input.origin.to_radians();
        let (lat2, lon2) = input.destination.to_radians();
        let (p1, p2) = (90.0 - lat1, 90.0 - lat2);
        let b = (p2.cos() * p1.cos() + p2.sin() * p1.sin() * (lon2 - lon1).cos()).acos();
        let expected = (p2.sin() * (lon2 - lon1).sin() / b.sin()).asin();

        assert!((azimuth - expected).abs() < 1e-9, "Azimuth was {}, expected {}", azimuth, expected);
        assert!((azimuth - PI / 2.0).abs() > 0.1);
    }

    #[test]
    fn test_coincident_points_are_degenerate() {
        for convention in [AzimuthConvention::Spherical, AzimuthConvention::Legacy] {
            let result = initial_azimuth(&pair(32.7, -117.2, 32.7, -117.2), convention);
            assert!(matches!(result, Err(ComputationError::DegenerateAzimuth { .. })));
        }
    }

    #[test]
    fn test_antipodes_are_degenerate() {
        let polar = initial_azimuth(&pair(90.0, 0.0, -90.0, 0.0), AzimuthConvention::Spherical);
        assert!(matches!(polar, Err(ComputationError::DegenerateAzimuth { .. })));

        let equatorial = initial_azimuth(&pair(0.0, 0.0, 0.0, 180.0), AzimuthConvention::Spherical);
        assert!(matches!(equatorial, Err(ComputationError::DegenerateAzimuth { .. })));
    }

    #[test]
    fn test_colatitude() {
        assert_eq!(AzimuthConvention::Spherical.colatitude(0.0), FRAC_PI_2);
        assert_eq!(AzimuthConvention::Legacy.colatitude(0.0), 90.0);
    }
}
