//! Feature Vector - Core data structure for model input
//!
//! Named fields make the positional layout a compile-time guarantee;
//! `as_array()` yields them in `FEATURE_LAYOUT` order.

use serde::{Deserialize, Serialize};

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};
use crate::logic::sample::WaterSample;

/// Engineered features `[T, EC, pH, pH·T, EC·pH]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub temperature_c: f64,
    pub conductivity_us_cm: f64,
    pub ph: f64,
    pub ph_x_temperature: f64,
    pub conductivity_x_ph: f64,
}

impl FeatureVector {
    /// Values in layout order
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.temperature_c,
            self.conductivity_us_cm,
            self.ph,
            self.ph_x_temperature,
            self.conductivity_x_ph,
        ]
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.as_array().get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Get feature names for this vector
    pub fn feature_names(&self) -> &'static [&'static str] {
        FEATURE_LAYOUT
    }
}

impl From<&WaterSample> for FeatureVector {
    fn from(sample: &WaterSample) -> Self {
        engineer(sample)
    }
}

/// Derive the two interaction features.
///
/// No validation: NaN/Infinity propagate arithmetically.
pub fn engineer(sample: &WaterSample) -> FeatureVector {
    let t = sample.temperature_c;
    let ec = sample.conductivity_us_cm;
    let ph = sample.ph;

    FeatureVector {
        temperature_c: t,
        conductivity_us_cm: ec,
        ph,
        ph_x_temperature: ph * t,
        conductivity_x_ph: ec * ph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engineer_order() {
        let features = engineer(&WaterSample::new(28.0, 7.5, 1200.0));
        assert_eq!(features.as_array(), [28.0, 1200.0, 7.5, 210.0, 9000.0]);
    }

    #[test]
    fn test_get_by_name() {
        let features = engineer(&WaterSample::new(20.0, 8.0, 500.0));
        assert_eq!(features.get_by_name("ph_x_temperature"), Some(160.0));
        assert_eq!(features.get_by_name("conductivity_x_ph"), Some(4000.0));
        assert_eq!(features.get_by_name("salinity"), None);
        assert_eq!(features.get(5), None);
    }

    #[test]
    fn test_non_finite_propagates() {
        let features = engineer(&WaterSample::new(f64::NAN, 7.0, f64::INFINITY));
        assert!(features.temperature_c.is_nan());
        assert!(features.ph_x_temperature.is_nan());
        assert_eq!(features.conductivity_x_ph, f64::INFINITY);
    }

    #[test]
    fn test_from_sample() {
        let sample = WaterSample::new(10.0, 6.0, 100.0);
        let features: FeatureVector = (&sample).into();
        assert_eq!(features, engineer(&sample));
        assert_eq!(features.feature_names().len(), FEATURE_COUNT);
    }
}
