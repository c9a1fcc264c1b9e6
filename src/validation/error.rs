use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use std::fmt;
use thiserror::Error;

/// Failures raised by a formula after its inputs passed validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    /// Division by a vanishing `sin(b)` in the azimuth sine rule
    #[error("Azimuth is undefined: sin(b) = {sin_b:e}, the points coincide or are antipodal")]
    DegenerateAzimuth { sin_b: f64 },
    #[error("Computation of {operation} produced a non-finite result")]
    NonFiniteResult { operation: String },
}

impl ComputationError {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ComputationError::DegenerateAzimuth { .. } => "degenerate_azimuth",
            ComputationError::NonFiniteResult { .. } => "non_finite_result",
        }
    }
}

impl Serialize for ComputationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ComputationError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Field name to messages, in the order the fields were checked.
///
/// Serializes as a JSON object `{"field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    fields: Vec<(String, Vec<String>)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message for `field`
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.fields.push((field.to_string(), vec![message])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// `Ok(())` when no field failed, otherwise the collected errors
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .fields
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
            .collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, messages) in &self.fields {
            map.serialize_entry(name, messages)?;
        }
        map.end()
    }
}

/// Any failure of a great-circle operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeodesyError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Computation(#[from] ComputationError),
}

pub type GeodesyResult<T> = Result<T, GeodesyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_grouped_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("originLatitude", "The origin latitude field is required.");
        errors.add("bodyRadius", "The body radius must be a number.");
        errors.add("originLatitude", "second");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("originLatitude").unwrap().len(), 2);
        assert!(errors.contains("bodyRadius"));
        assert!(!errors.contains("destinationLatitude"));
        assert_eq!(errors.field_names().collect::<Vec<_>>(), vec!["originLatitude", "bodyRadius"]);
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut errors = ValidationErrors::new();
        errors.add("originLongitude", "a");
        errors.add("destinationLatitude", "b");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"originLongitude":["a"],"destinationLatitude":["b"]}"#);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add("bodyRadius", "missing");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_computation_error_serialization() {
        let error = ComputationError::DegenerateAzimuth { sin_b: 0.0 };
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["kind"], "degenerate_azimuth");
        assert!(value["message"].as_str().unwrap().contains("undefined"));
    }

    #[test]
    fn test_geodesy_error_display() {
        let mut errors = ValidationErrors::new();
        errors.add("bodyRadius", "The body radius field is required.");
        let error = GeodesyError::from(errors);
        assert_eq!(error.to_string(), "Validation failed: The body radius field is required.");

        let error = GeodesyError::from(ComputationError::NonFiniteResult {
            operation: "azimuth".to_string(),
        });
        assert_eq!(error.to_string(), "Computation of azimuth produced a non-finite result");
    }
}
