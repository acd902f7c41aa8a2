//! Standardizer - Fixed affine transform per feature
//!
//! `(x - mean) / std`, elementwise. Stds are non-zero by construction
//! of `ModelParameters`; nothing is checked per call.

use serde::{Deserialize, Serialize};

use super::params::ModelParameters;
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

/// Standardized features, same order and arity as `FeatureVector`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledFeatureVector {
    pub temperature_c: f64,
    pub conductivity_us_cm: f64,
    pub ph: f64,
    pub ph_x_temperature: f64,
    pub conductivity_x_ph: f64,
}

impl ScaledFeatureVector {
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.temperature_c,
            self.conductivity_us_cm,
            self.ph,
            self.ph_x_temperature,
            self.conductivity_x_ph,
        ]
    }

    fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        let [temperature_c, conductivity_us_cm, ph, ph_x_temperature, conductivity_x_ph] = values;
        Self {
            temperature_c,
            conductivity_us_cm,
            ph,
            ph_x_temperature,
            conductivity_x_ph,
        }
    }
}

/// Standardize features
pub fn scale(features: &FeatureVector, params: &ModelParameters) -> ScaledFeatureVector {
    let raw = features.as_array();
    let mut scaled = [0.0f64; FEATURE_COUNT];

    for i in 0..FEATURE_COUNT {
        scaled[i] = (raw[i] - params.scaler_means[i]) / params.scaler_stds[i];
    }

    ScaledFeatureVector::from_array(scaled)
}
