//! Great-circle formulas on a spherical body
//!
//! Every function here is pure: degrees in, one scalar out. Validation of the
//! inputs happens in [`crate::validation`] before these are called.

pub mod distance;
pub mod azimuth;
pub mod body;

pub use distance::{haversine_central_angle, haversine_distance, vincenty_central_angle, vincenty_distance};
pub use azimuth::{initial_azimuth, AzimuthConvention};
pub use body::{half_circumference, HalfCircumferenceFormula};
