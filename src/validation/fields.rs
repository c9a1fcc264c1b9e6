//! Field-presence, numeric-type and range checks for flat request maps

use crate::core::{MAX_LATITUDE_DEG, MAX_LONGITUDE_DEG, MIN_LATITUDE_DEG, MIN_LONGITUDE_DEG};
use crate::validation::error::ValidationErrors;
use serde_json::{Map, Value};

pub const ORIGIN_LATITUDE: &str = "originLatitude";
pub const ORIGIN_LONGITUDE: &str = "originLongitude";
pub const DESTINATION_LATITUDE: &str = "destinationLatitude";
pub const DESTINATION_LONGITUDE: &str = "destinationLongitude";
pub const BODY_RADIUS: &str = "bodyRadius";

/// What a field holds, which decides its range check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Latitude,
    Longitude,
    Radius,
}

/// One named numeric field of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false }
    }
}

/// Fields of the three coordinate-pair operations
pub const PAIR_FIELDS: [FieldSpec; 5] = [
    FieldSpec::required(ORIGIN_LATITUDE, FieldKind::Latitude),
    FieldSpec::required(ORIGIN_LONGITUDE, FieldKind::Longitude),
    FieldSpec::required(DESTINATION_LATITUDE, FieldKind::Latitude),
    FieldSpec::required(DESTINATION_LONGITUDE, FieldKind::Longitude),
    FieldSpec::optional(BODY_RADIUS, FieldKind::Radius),
];

/// Fields of the half-circumference operation
pub const RADIUS_FIELDS: [FieldSpec; 1] = [FieldSpec::required(BODY_RADIUS, FieldKind::Radius)];

/// Numbers extracted from a request that passed validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedFields {
    values: Vec<(&'static str, f64)>,
}

impl ValidatedFields {
    /// Value of `name`, `None` when an optional field was absent
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    }

    /// Value of a required field
    pub fn required(&self, name: &str) -> Result<f64, ValidationErrors> {
        self.get(name).ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.add(name, required_message(name));
            errors
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validates flat request maps against a list of [`FieldSpec`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestValidator {
    enforce_ranges: bool,
}

impl RequestValidator {
    pub fn new(enforce_ranges: bool) -> Self {
        Self { enforce_ranges }
    }

    pub fn enforces_ranges(&self) -> bool {
        self.enforce_ranges
    }

    /// Check every field in `fields` and collect all failures before returning.
    ///
    /// A JSON `null` or blank string counts as absent. Numbers and strings that
    /// parse to a finite number are numeric; everything else is not.
    pub fn validate(
        &self,
        request: &Map<String, Value>,
        fields: &[FieldSpec],
    ) -> Result<ValidatedFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut validated = ValidatedFields::default();

        for spec in fields {
            match read_field(request, spec.name) {
                FieldValue::Absent => {
                    if spec.required {
                        errors.add(spec.name, required_message(spec.name));
                    }
                }
                FieldValue::NotNumeric => {
                    errors.add(spec.name, format!("The {} must be a number.", human_name(spec.name)));
                }
                FieldValue::Number(value) => {
                    if self.enforce_ranges {
                        if let Some(message) = range_violation(spec, value) {
                            errors.add(spec.name, message);
                            continue;
                        }
                    }
                    validated.values.push((spec.name, value));
                }
            }
        }

        errors.into_result().map(|()| validated)
    }
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new(true)
    }
}

enum FieldValue {
    Absent,
    NotNumeric,
    Number(f64),
}

fn read_field(request: &Map<String, Value>, name: &str) -> FieldValue {
    match request.get(name) {
        None | Some(Value::Null) => FieldValue::Absent,
        Some(Value::Number(number)) => match number.as_f64() {
            Some(value) if value.is_finite() => FieldValue::Number(value),
            _ => FieldValue::NotNumeric,
        },
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return FieldValue::Absent;
            }
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => FieldValue::Number(value),
                _ => FieldValue::NotNumeric,
            }
        }
        Some(_) => FieldValue::NotNumeric,
    }
}

fn range_violation(spec: &FieldSpec, value: f64) -> Option<String> {
    let name = human_name(spec.name);
    match spec.kind {
        FieldKind::Latitude if !(MIN_LATITUDE_DEG..=MAX_LATITUDE_DEG).contains(&value) => Some(format!(
            "The {} must be between {} and {}.",
            name, MIN_LATITUDE_DEG, MAX_LATITUDE_DEG
        )),
        FieldKind::Longitude if !(MIN_LONGITUDE_DEG..=MAX_LONGITUDE_DEG).contains(&value) => Some(format!(
            "The {} must be between {} and {}.",
            name, MIN_LONGITUDE_DEG, MAX_LONGITUDE_DEG
        )),
        FieldKind::Radius if value < 0.0 => Some(format!("The {} must be at least 0.", name)),
        _ => None,
    }
}

fn required_message(name: &str) -> String {
    format!("The {} field is required.", human_name(name))
}

/// `originLatitude` -> `origin latitude`
pub fn human_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push(' ');
            }
            out.extend(ch.to_lowercase());
        } else if ch == '_' {
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}
