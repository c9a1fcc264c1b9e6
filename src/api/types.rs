//! Common API types

use crate::validation::fields::{FieldSpec, PAIR_FIELDS, RADIUS_FIELDS};
use crate::validation::{ComputationError, GeodesyError, GeodesyResult, ValidationErrors};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Result type for API plumbing that fails before any validation runs
pub type ApiResult<T> = Result<T, ApiError>;

/// Transport-level failures: the request could not be routed or read
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unknown operation '{name}'")]
    UnknownOperation { name: String },
    #[error("Malformed request body: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("Request body must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// The four great-circle operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Haversine,
    Vincenty,
    Azimuth,
    HalfCircumference,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Haversine,
        Operation::Vincenty,
        Operation::Azimuth,
        Operation::HalfCircumference,
    ];

    /// Route name the operation is served under
    pub fn route(self) -> &'static str {
        match self {
            Operation::Haversine => "haversine",
            Operation::Vincenty => "vincenty",
            Operation::Azimuth => "azimuth",
            Operation::HalfCircumference => "half-circumference",
        }
    }

    /// Name of the single field in a success response
    pub fn result_field(self) -> &'static str {
        match self {
            Operation::Haversine | Operation::Vincenty => "distance",
            Operation::Azimuth => "azimuth",
            Operation::HalfCircumference => "halfCircumference",
        }
    }

    /// Fields the operation reads from a request
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Operation::Haversine | Operation::Vincenty | Operation::Azimuth => &PAIR_FIELDS,
            Operation::HalfCircumference => &RADIUS_FIELDS,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Operation {
    type Err = ApiError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "haversine" => Ok(Operation::Haversine),
            "vincenty" => Ok(Operation::Vincenty),
            "azimuth" => Ok(Operation::Azimuth),
            "half-circumference" | "halfCircumference" | "distanceToPoles" | "distance-to-poles" => {
                Ok(Operation::HalfCircumference)
            }
            _ => Err(ApiError::UnknownOperation { name: name.to_string() }),
        }
    }
}

/// Parse a request body into the flat field map operations consume
pub fn parse_request(body: &str) -> ApiResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(map),
        Value::Null => Err(ApiError::NotAnObject { found: "null" }),
        Value::Bool(_) => Err(ApiError::NotAnObject { found: "a boolean" }),
        Value::Number(_) => Err(ApiError::NotAnObject { found: "a number" }),
        Value::String(_) => Err(ApiError::NotAnObject { found: "a string" }),
        Value::Array(_) => Err(ApiError::NotAnObject { found: "an array" }),
    }
}

/// Outcome of one operation, ready to serialize
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// `{"<field>": value}`
    Success { field: &'static str, value: f64 },
    /// `{"<field>": ["message", ...], ...}`
    ValidationFailed(ValidationErrors),
    /// `{"error": {"kind": ..., "message": ...}}`
    ComputationFailed(ComputationError),
}

impl ApiResponse {
    pub fn from_result(operation: Operation, result: GeodesyResult<f64>) -> Self {
        match result {
            Ok(value) => ApiResponse::Success {
                field: operation.result_field(),
                value,
            },
            Err(GeodesyError::Validation(errors)) => ApiResponse::ValidationFailed(errors),
            Err(GeodesyError::Computation(error)) => ApiResponse::ComputationFailed(error),
        }
    }

    /// HTTP-style status a transport should answer with
    pub fn status(&self) -> u16 {
        match self {
            ApiResponse::Success { .. } => 200,
            ApiResponse::ValidationFailed(_) | ApiResponse::ComputationFailed(_) => 422,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    /// The computed value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            ApiResponse::Success { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl Serialize for ApiResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ApiResponse::Success { field, value } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(field, value)?;
                map.end()
            }
            ApiResponse::ValidationFailed(errors) => errors.serialize(serializer),
            ApiResponse::ComputationFailed(error) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}
