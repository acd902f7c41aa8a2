//! Model Parameters - Fixed embedded parameter set
//!
//! Scaler statistics and surrogate weights from the offline fit.
//! Never derived from input, never mutated after construction.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::logic::features::{compute_layout_hash, validate_layout, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};

// ============================================================================
// EMBEDDED CONSTANTS
// ============================================================================

/// Scaler means, in `FEATURE_LAYOUT` order
pub const SCALER_MEANS: [f64; FEATURE_COUNT] = [22.5, 1525.0, 7.5, 168.75, 11437.5];

/// Scaler standard deviations, in `FEATURE_LAYOUT` order (all non-zero)
pub const SCALER_STDS: [f64; FEATURE_COUNT] = [10.1, 851.6, 1.44, 80.0, 6800.0];

/// Surrogate intercept (log1p scale)
pub const INTERCEPT: f64 = -0.42;

/// Linear weights, in `FEATURE_LAYOUT` order
pub const LINEAR_WEIGHTS: [f64; FEATURE_COUNT] = [0.22, 0.31, 0.485, 0.55, 0.5925];

/// tanh saturation envelope half-width
pub const SATURATION_BOUND: f64 = 2.8;

/// Hard clamp on the saturated log-scale output
pub const LOG_FLOOR: f64 = -0.05;
pub const LOG_CEILING: f64 = 3.2;

/// Process-wide default parameter set
pub static DEFAULT_PARAMETERS: Lazy<ModelParameters> = Lazy::new(ModelParameters::embedded);

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Complete parameter set for the scaler and surrogate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Feature layout version this set was fitted against
    pub layout_version: u8,
    /// CRC32 of the feature layout this set was fitted against
    pub layout_hash: u32,
    pub scaler_means: [f64; FEATURE_COUNT],
    pub scaler_stds: [f64; FEATURE_COUNT],
    pub intercept: f64,
    pub weights: [f64; FEATURE_COUNT],
    pub saturation_bound: f64,
    pub log_floor: f64,
    pub log_ceiling: f64,
}

impl ModelParameters {
    /// The compiled-in parameter set
    pub fn embedded() -> Self {
        Self {
            layout_version: FEATURE_VERSION,
            layout_hash: compute_layout_hash(),
            scaler_means: SCALER_MEANS,
            scaler_stds: SCALER_STDS,
            intercept: INTERCEPT,
            weights: LINEAR_WEIGHTS,
            saturation_bound: SATURATION_BOUND,
            log_floor: LOG_FLOOR,
            log_ceiling: LOG_CEILING,
        }
    }

    /// Check the construction-time invariants.
    ///
    /// Every std must be finite and non-zero; the clamp range must be ordered.
    pub fn validate(&self) -> CoreResult<()> {
        validate_layout(self.layout_version, self.layout_hash)?;

        for i in 0..FEATURE_COUNT {
            let feature = FEATURE_LAYOUT[i];

            if !self.scaler_means[i].is_finite() {
                return Err(CoreError::invalid_parameter(
                    &format!("scaler_means[{}]", feature),
                    "must be finite",
                ));
            }

            let std = self.scaler_stds[i];
            if !std.is_finite() || std == 0.0 {
                return Err(CoreError::invalid_parameter(
                    &format!("scaler_stds[{}]", feature),
                    format!("must be finite and non-zero, got {}", std),
                ));
            }

            if !self.weights[i].is_finite() {
                return Err(CoreError::invalid_parameter(
                    &format!("weights[{}]", feature),
                    "must be finite",
                ));
            }
        }

        if !self.intercept.is_finite() {
            return Err(CoreError::invalid_parameter("intercept", "must be finite"));
        }

        if !(self.saturation_bound.is_finite() && self.saturation_bound > 0.0) {
            return Err(CoreError::invalid_parameter(
                "saturation_bound",
                format!("must be finite and positive, got {}", self.saturation_bound),
            ));
        }

        if !(self.log_floor.is_finite() && self.log_ceiling.is_finite())
            || self.log_floor >= self.log_ceiling
        {
            return Err(CoreError::invalid_parameter(
                "log_clamp",
                format!("expected floor < ceiling, got [{}, {}]", self.log_floor, self.log_ceiling),
            ));
        }

        Ok(())
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_is_valid() {
        assert!(DEFAULT_PARAMETERS.validate().is_ok());
        assert_eq!(*DEFAULT_PARAMETERS, ModelParameters::default());
    }

    #[test]
    fn test_clamp_range() {
        assert_eq!(DEFAULT_PARAMETERS.log_floor, -0.05);
        assert_eq!(DEFAULT_PARAMETERS.log_ceiling, 3.2);
        assert_eq!(DEFAULT_PARAMETERS.saturation_bound, 2.8);
    }

    #[test]
    fn test_zero_std_rejected() {
        let mut params = ModelParameters::embedded();
        params.scaler_stds[2] = 0.0;

        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("scaler_stds[ph]"));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let mut params = ModelParameters::embedded();
        params.weights[4] = f64::NAN;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_inverted_clamp_rejected() {
        let params = ModelParameters {
            log_floor: 3.2,
            log_ceiling: -0.05,
            ..ModelParameters::embedded()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_non_positive_saturation_rejected() {
        let params = ModelParameters {
            saturation_bound: 0.0,
            ..ModelParameters::embedded()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_layout_mismatch_rejected() {
        let params = ModelParameters {
            layout_version: FEATURE_VERSION + 1,
            ..ModelParameters::embedded()
        };
        assert!(matches!(params.validate(), Err(CoreError::LayoutMismatch { .. })));
    }
}
