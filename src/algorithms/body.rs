//! Whole-body figures derived from the radius alone

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Which figure the half-circumference operation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfCircumferenceFormula {
    /// `π·r²`. This is what existing clients of the operation receive.
    #[default]
    Legacy,
    /// `π·r`, the pole-to-pole arc along a meridian
    Arc,
}

/// Half circumference of a sphere of `body_radius` under `formula`
#[must_use]
pub fn half_circumference(body_radius: f64, formula: HalfCircumferenceFormula) -> f64 {
    match formula {
        HalfCircumferenceFormula::Legacy => PI * body_radius.powi(2),
        HalfCircumferenceFormula::Arc => PI * body_radius,
    }
}
