//! Utility modules for configuration

pub mod config;

pub use config::{CalculatorConfig, ConfigError, ConfigurationManager};
