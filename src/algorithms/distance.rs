//! Great-circle distance by the Haversine and spherical Vincenty formulas

use crate::core::CoordinatePair;

fn square(x: f64) -> f64 {
    x * x
}

/// Central angle (radians) between the two points of `pair`, Haversine form.
///
/// `a` is clamped to [0, 1] so rounding near antipodes cannot push `asin`
/// out of its domain.
pub fn haversine_central_angle(pair: &CoordinatePair) -> f64 {
    let (lat1, lon1) = pair.origin.to_radians();
    let (lat2, lon2) = pair.destination.to_radians();

    let lat_delta = lat2 - lat1;
    let lon_delta = lon2 - lon1;

    let a = square((lat_delta / 2.0).sin())
        + lat1.cos() * lat2.cos() * square((lon_delta / 2.0).sin());

    2.0 * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Great-circle distance on a sphere of `body_radius`, Haversine form
#[must_use]
pub fn haversine_distance(pair: &CoordinatePair, body_radius: f64) -> f64 {
    haversine_central_angle(pair) * body_radius
}

/// Central angle (radians) between the two points of `pair`, spherical Vincenty form.
///
/// Uses `atan2` of the cross and dot products, which stays well conditioned
/// for both tiny separations and near-antipodal points.
pub fn vincenty_central_angle(pair: &CoordinatePair) -> f64 {
    let (lat1, lon1) = pair.origin.to_radians();
    let (lat2, lon2) = pair.destination.to_radians();

    let lon_delta = lon2 - lon1;

    let numerator = (square(lat2.cos() * lon_delta.sin())
        + square(lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * lon_delta.cos()))
    .sqrt();
    let denominator = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * lon_delta.cos();

    numerator.atan2(denominator)
}

/// Great-circle distance on a sphere of `body_radius`, spherical Vincenty form
#[must_use]
pub fn vincenty_distance(pair: &CoordinatePair, body_radius: f64) -> f64 {
    vincenty_central_angle(pair) * body_radius
}
