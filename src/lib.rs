//! Great-Circle Geodesy
//!
//! Haversine and spherical Vincenty distance, initial azimuth and
//! half-circumference on a spherical body, behind a flat JSON
//! request/response shell.

pub mod core;
pub mod algorithms;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{CoordinatePair, GeoPoint, EARTH_MEAN_RADIUS_M};
pub use crate::algorithms::{
    half_circumference, haversine_distance, initial_azimuth, vincenty_distance, AzimuthConvention,
    HalfCircumferenceFormula,
};
pub use crate::validation::{ComputationError, GeodesyError, GeodesyResult, RequestValidator, ValidationErrors};
pub use crate::utils::{CalculatorConfig, ConfigError, ConfigurationManager};
pub use crate::api::{parse_request, ApiError, ApiResponse, GreatCircleCalculator, Operation};
