//! Request/response shell around the great-circle formulas
//!
//! Transports (HTTP handlers, the CLI) hand a flat JSON field map to
//! [`GreatCircleCalculator::handle`] and get back an [`ApiResponse`] that
//! serializes to either the single named result or a field-to-messages map.

pub mod calculator;
pub mod types;

pub use calculator::GreatCircleCalculator;
pub use types::{parse_request, ApiError, ApiResponse, ApiResult, Operation};
