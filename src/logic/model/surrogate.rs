//! Regression Surrogate - Fixed analytic TAN surface
//!
//! Linear terms + three fixed second-order cross terms, then a tanh
//! saturation envelope, then a hard clamp. Output is log1p(TAN).
//!
//! Terms are accumulated in a fixed order so the result is bit-reproducible
//! for a given parameter set.

use super::params::ModelParameters;
use super::scaler::ScaledFeatureVector;

// ============================================================================
// SECOND-ORDER TERMS (part of the fixed model, not derived from weights)
// ============================================================================

/// Coefficient for temperature_s * conductivity_s
pub const CROSS_TEMP_CONDUCTIVITY: f64 = 0.04;

/// Coefficient for conductivity_s * ph_s
pub const CROSS_CONDUCTIVITY_PH: f64 = 0.03;

/// Coefficient for temperature_s * (ph * temperature)_s
pub const CROSS_TEMP_PH_TEMP: f64 = 0.02;

// ============================================================================
// PREDICTION
// ============================================================================

/// Raw surface value before saturation and clamp
pub fn raw_surface(scaled: &ScaledFeatureVector, params: &ModelParameters) -> f64 {
    let s = scaled.as_array();

    let mut value = params.intercept;
    for (weight, feature) in params.weights.iter().zip(s.iter()) {
        value += weight * feature;
    }

    value += CROSS_TEMP_CONDUCTIVITY * scaled.temperature_c * scaled.conductivity_us_cm;
    value += CROSS_CONDUCTIVITY_PH * scaled.conductivity_us_cm * scaled.ph;
    value += CROSS_TEMP_PH_TEMP * scaled.temperature_c * scaled.ph_x_temperature;

    value
}

/// Smooth bound: `bound * tanh(v / bound)`
pub fn saturate(value: f64, bound: f64) -> f64 {
    bound * (value / bound).tanh()
}

/// Hard clamp that lets NaN through instead of panicking or snapping to a bound
fn clamp_log(value: f64, floor: f64, ceiling: f64) -> f64 {
    if value < floor {
        floor
    } else if value > ceiling {
        ceiling
    } else {
        value
    }
}

/// Log-scale TAN estimate, always within `[log_floor, log_ceiling]` for non-NaN input
pub fn predict_log_tan(scaled: &ScaledFeatureVector, params: &ModelParameters) -> f64 {
    let raw = raw_surface(scaled, params);
    let saturated = saturate(raw, params.saturation_bound);
    clamp_log(saturated, params.log_floor, params.log_ceiling)
}

/// Undo the log1p encoding: `e^v - 1`.
///
/// Negative for `v < 0`; the pipeline floors it later.
pub fn invert_log1p(log_value: f64) -> f64 {
    log_value.exp_m1()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::engineer;
    use crate::logic::model::{scale, DEFAULT_PARAMETERS};
    use crate::logic::sample::WaterSample;

    fn scaled_for(t: f64, ph: f64, ec: f64) -> ScaledFeatureVector {
        scale(&engineer(&WaterSample::new(t, ph, ec)), &DEFAULT_PARAMETERS)
    }

    fn zero_scaled() -> ScaledFeatureVector {
        ScaledFeatureVector {
            temperature_c: 0.0,
            conductivity_us_cm: 0.0,
            ph: 0.0,
            ph_x_temperature: 0.0,
            conductivity_x_ph: 0.0,
        }
    }

    #[test]
    fn test_zero_input_yields_intercept() {
        assert_eq!(raw_surface(&zero_scaled(), &DEFAULT_PARAMETERS), DEFAULT_PARAMETERS.intercept);
    }

    #[test]
    fn test_cross_terms_applied() {
        let scaled = ScaledFeatureVector {
            temperature_c: 1.0,
            conductivity_us_cm: 1.0,
            ph: 1.0,
            ph_x_temperature: 1.0,
            conductivity_x_ph: 0.0,
        };
        let params = &*DEFAULT_PARAMETERS;
        let linear = params.intercept + params.weights[0] + params.weights[1] + params.weights[2] + params.weights[3];

        let raw = raw_surface(&scaled, params);
        assert!((raw - (linear + 0.04 + 0.03 + 0.02)).abs() < 1e-12);
    }

    #[test]
    fn test_saturation_is_smooth_and_bounded() {
        assert_eq!(saturate(0.0, 2.8), 0.0);
        assert!((saturate(0.01, 2.8) - 0.01).abs() < 1e-6);
        assert!(saturate(1e9, 2.8) <= 2.8);
        assert!(saturate(-1e9, 2.8) >= -2.8);
    }

    #[test]
    fn test_output_within_clamp_range() {
        let params = &*DEFAULT_PARAMETERS;
        let inputs = [
            (28.0, 7.5, 1200.0),
            (38.0, 9.5, 2900.0),
            (5.0, 5.0, 50.0),
            (-200.0, 0.0, -1e6),
            (1e4, 14.0, 1e7),
            (f64::MAX, f64::MAX, f64::MAX),
        ];

        for (t, ph, ec) in inputs {
            let v = predict_log_tan(&scaled_for(t, ph, ec), params);
            if v.is_nan() {
                continue;
            }
            assert!(v >= params.log_floor && v <= params.log_ceiling, "{} out of range", v);
        }
    }

    #[test]
    fn test_floor_applied_after_saturation() {
        let v = predict_log_tan(&scaled_for(5.0, 5.0, 50.0), &DEFAULT_PARAMETERS);
        assert_eq!(v, -0.05);
    }

    #[test]
    fn test_nan_propagates() {
        let v = predict_log_tan(&scaled_for(f64::NAN, 7.0, 1000.0), &DEFAULT_PARAMETERS);
        assert!(v.is_nan());
    }

    #[test]
    fn test_invert_log1p() {
        assert_eq!(invert_log1p(0.0), 0.0);
        assert!((invert_log1p(1.0_f64.ln_1p()) - 1.0).abs() < 1e-12);
        assert!(invert_log1p(-0.05) < 0.0);
    }
}
