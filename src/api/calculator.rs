//! Stateless calculator service
//!
//! Holds only an immutable [`CalculatorConfig`], so one instance can be
//! shared by any number of threads.

use crate::algorithms;
use crate::api::types::{parse_request, ApiResponse, ApiResult, Operation};
use crate::core::CoordinatePair;
use crate::utils::CalculatorConfig;
use crate::validation::fields::{
    BODY_RADIUS, DESTINATION_LATITUDE, DESTINATION_LONGITUDE, ORIGIN_LATITUDE, ORIGIN_LONGITUDE,
};
use crate::validation::{ComputationError, GeodesyResult, RequestValidator};
use serde_json::{Map, Value};

/// Great-circle calculator configured once and then used read-only
#[derive(Debug, Clone)]
pub struct GreatCircleCalculator {
    config: CalculatorConfig,
    validator: RequestValidator,
}

impl GreatCircleCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        let validator = RequestValidator::new(config.enforce_ranges);
        Self { config, validator }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Haversine distance; `None` radius falls back to the configured default
    pub fn haversine(&self, pair: &CoordinatePair, body_radius: Option<f64>) -> f64 {
        algorithms::haversine_distance(pair, self.radius_or_default(body_radius))
    }

    /// Spherical Vincenty distance; `None` radius falls back to the configured default
    pub fn vincenty(&self, pair: &CoordinatePair, body_radius: Option<f64>) -> f64 {
        algorithms::vincenty_distance(pair, self.radius_or_default(body_radius))
    }

    /// Initial azimuth (radians) under the configured colatitude convention
    pub fn azimuth(&self, pair: &CoordinatePair) -> Result<f64, ComputationError> {
        algorithms::initial_azimuth(pair, self.config.azimuth_convention)
    }

    pub fn half_circumference(&self, body_radius: f64) -> f64 {
        algorithms::half_circumference(body_radius, self.config.half_circumference_formula)
    }

    pub fn haversine_request(&self, request: &Map<String, Value>) -> GeodesyResult<f64> {
        let (pair, body_radius) = self.pair_input(Operation::Haversine, request)?;
        finite(Operation::Haversine, self.haversine(&pair, body_radius))
    }

    pub fn vincenty_request(&self, request: &Map<String, Value>) -> GeodesyResult<f64> {
        let (pair, body_radius) = self.pair_input(Operation::Vincenty, request)?;
        finite(Operation::Vincenty, self.vincenty(&pair, body_radius))
    }

    /// `bodyRadius` is validated like on the distance operations but not used
    pub fn azimuth_request(&self, request: &Map<String, Value>) -> GeodesyResult<f64> {
        let (pair, _) = self.pair_input(Operation::Azimuth, request)?;
        Ok(self.azimuth(&pair)?)
    }

    pub fn half_circumference_request(&self, request: &Map<String, Value>) -> GeodesyResult<f64> {
        let fields = self
            .validator
            .validate(request, Operation::HalfCircumference.fields())?;
        finite(
            Operation::HalfCircumference,
            self.half_circumference(fields.required(BODY_RADIUS)?),
        )
    }

    /// Run `operation` on `request`
    pub fn compute(&self, operation: Operation, request: &Map<String, Value>) -> GeodesyResult<f64> {
        match operation {
            Operation::Haversine => self.haversine_request(request),
            Operation::Vincenty => self.vincenty_request(request),
            Operation::Azimuth => self.azimuth_request(request),
            Operation::HalfCircumference => self.half_circumference_request(request),
        }
    }

    /// Run `operation` and wrap the outcome as a response, logging rejections
    pub fn handle(&self, operation: Operation, request: &Map<String, Value>) -> ApiResponse {
        let response = ApiResponse::from_result(operation, self.compute(operation, request));

        match &response {
            ApiResponse::Success { field, value } => {
                self.log_debug(operation, &format!("{} = {}", field, value));
            }
            ApiResponse::ValidationFailed(errors) => {
                let fields: Vec<&str> = errors.field_names().collect();
                self.log_warn(operation, &format!("validation failed for {}", fields.join(", ")));
            }
            ApiResponse::ComputationFailed(error) => {
                self.log_warn(operation, &error.to_string());
            }
        }

        response
    }

    /// Parse a raw JSON body, then [`handle`](Self::handle) it
    pub fn handle_json(&self, operation: Operation, body: &str) -> ApiResult<ApiResponse> {
        let request = parse_request(body)?;
        Ok(self.handle(operation, &request))
    }

    fn pair_input(
        &self,
        operation: Operation,
        request: &Map<String, Value>,
    ) -> GeodesyResult<(CoordinatePair, Option<f64>)> {
        let fields = self.validator.validate(request, operation.fields())?;
        let pair = CoordinatePair::from_degrees(
            fields.required(ORIGIN_LATITUDE)?,
            fields.required(ORIGIN_LONGITUDE)?,
            fields.required(DESTINATION_LATITUDE)?,
            fields.required(DESTINATION_LONGITUDE)?,
        );
        Ok((pair, fields.get(BODY_RADIUS)))
    }

    fn radius_or_default(&self, body_radius: Option<f64>) -> f64 {
        body_radius.unwrap_or(self.config.default_body_radius)
    }

    fn log_debug(&self, operation: Operation, message: &str) {
        if self.config.debug_logging {
            eprintln!("[DEBUG {}] {}", operation, message);
        }
    }

    fn log_warn(&self, operation: Operation, message: &str) {
        eprintln!("[WARN {}] {}", operation, message);
    }
}

/// Overflowing radii and a non-finite default radius end up here
fn finite(operation: Operation, value: f64) -> GeodesyResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComputationError::NonFiniteResult {
            operation: operation.route().to_string(),
        }
        .into())
    }
}

impl Default for GreatCircleCalculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}
