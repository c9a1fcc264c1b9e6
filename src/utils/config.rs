use crate::algorithms::{AzimuthConvention, HalfCircumferenceFormula};
use crate::core::EARTH_MEAN_RADIUS_M;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Calculator-wide configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Body radius used when a request does not carry one
    pub default_body_radius: f64,
    /// Reject latitudes outside [-90, 90], longitudes outside [-180, 180]
    /// and negative radii
    pub enforce_ranges: bool,
    /// Colatitude convention of the azimuth operation
    pub azimuth_convention: AzimuthConvention,
    /// Figure reported by the half-circumference operation
    pub half_circumference_formula: HalfCircumferenceFormula,
    /// Log every computed result to stderr
    pub debug_logging: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_body_radius: EARTH_MEAN_RADIUS_M,
            enforce_ranges: true,
            azimuth_convention: AzimuthConvention::Spherical,
            half_circumference_formula: HalfCircumferenceFormula::Legacy,
            debug_logging: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter { parameter: String, value: String, reason: String },
    #[error("I/O error: {message}")]
    Io { message: String },
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Configuration validation result
#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<String>,
}

/// Holds the active configuration and its file binding
pub struct ConfigurationManager {
    config: CalculatorConfig,
    config_file_path: Option<String>,
    is_modified: bool,
}

impl ConfigurationManager {
    /// Create a new configuration manager with default settings
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            config_file_path: None,
            is_modified: false,
        }
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Replace the whole configuration after validating it
    pub fn update_config(&mut self, config: CalculatorConfig) -> Result<(), ConfigError> {
        Self::first_error(Self::validate_config(&config))?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from a JSON file. Missing keys take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: CalculatorConfig = serde_json::from_str(&content).map_err(|e| ConfigError::Serialization {
            message: format!("Failed to parse config file '{}': {}", path_str, e),
        })?;

        Self::first_error(Self::validate_config(&config))?;

        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::Serialization {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&path, content).map_err(|e| ConfigError::Io {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })?;

        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the currently loaded file path
    pub fn save(&mut self) -> Result<(), ConfigError> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::Io {
                message: "No file path set for saving configuration".to_string(),
            }),
        }
    }

    /// Check if configuration has been modified since last load or save
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Update the default body radius, returning the previous value
    pub fn set_default_body_radius(&mut self, radius: f64) -> Result<f64, ConfigError> {
        if let Some(error) = Self::check_body_radius(radius) {
            return Err(error);
        }

        let old_value = self.config.default_body_radius;
        self.config.default_body_radius = radius;
        self.is_modified = true;
        Ok(old_value)
    }

    pub fn set_enforce_ranges(&mut self, enabled: bool) -> bool {
        let old_value = self.config.enforce_ranges;
        self.config.enforce_ranges = enabled;
        self.is_modified = true;
        old_value
    }

    pub fn set_azimuth_convention(&mut self, convention: AzimuthConvention) -> AzimuthConvention {
        let old_value = self.config.azimuth_convention;
        self.config.azimuth_convention = convention;
        self.is_modified = true;
        old_value
    }

    pub fn set_half_circumference_formula(&mut self, formula: HalfCircumferenceFormula) -> HalfCircumferenceFormula {
        let old_value = self.config.half_circumference_formula;
        self.config.half_circumference_formula = formula;
        self.is_modified = true;
        old_value
    }

    pub fn set_debug_logging(&mut self, enabled: bool) -> bool {
        let old_value = self.config.debug_logging;
        self.config.debug_logging = enabled;
        self.is_modified = true;
        old_value
    }

    /// Validate a configuration without applying it
    pub fn validate_config(config: &CalculatorConfig) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if let Some(error) = Self::check_body_radius(config.default_body_radius) {
            errors.push(error);
        }

        if !config.enforce_ranges {
            warnings.push("Range checks disabled: out-of-range coordinates are computed as given".to_string());
        }

        if config.azimuth_convention == AzimuthConvention::Legacy {
            warnings.push("Legacy azimuth convention subtracts radians from 90 and does not give a true bearing".to_string());
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    fn check_body_radius(radius: f64) -> Option<ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Some(ConfigError::InvalidParameter {
                parameter: "default_body_radius".to_string(),
                value: radius.to_string(),
                reason: "Body radius must be a finite positive number".to_string(),
            });
        }
        None
    }

    fn first_error(validation: ValidationResult) -> Result<(), ConfigError> {
        match validation.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new()
    }
}
