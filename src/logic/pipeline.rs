//! Prediction Pipeline - Orchestration
//!
//! features → scale → surrogate → expm1 → Emerson → floor → classify.
//! Strict sequence, no branching, no early exit, no logging per call.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::logic::equilibrium::toxic_ammonia;
use crate::logic::features::{engineer, FeatureVector};
use crate::logic::model::{
    invert_log1p, predict_log_tan, scale, ModelParameters, ScaledFeatureVector, DEFAULT_PARAMETERS,
};
use crate::logic::risk::{classify_with_thresholds, RiskThresholds, RiskTier};
use crate::logic::sample::WaterSample;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Prediction output
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Total Ammonia Nitrogen (mg/L), ≥ 0 for finite input
    #[serde(rename = "TAN")]
    pub tan_mg_l: f64,
    /// Unionized NH3 (mg/L), ≥ 0 for finite input
    #[serde(rename = "toxicNH3")]
    pub toxic_nh3_mg_l: f64,
    pub risk: RiskTier,
}

/// Every intermediate value of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionTrace {
    pub sample: WaterSample,
    pub features: FeatureVector,
    pub scaled: ScaledFeatureVector,
    /// Surrogate output, log1p scale, after saturation and clamp
    pub log_tan: f64,
    /// expm1(log_tan), before the zero floor
    pub tan_unfloored: f64,
    /// Emerson output, before the zero floor
    pub toxic_unfloored: f64,
    pub result: PredictionResult,
}

/// Zero floor that keeps NaN as NaN
fn floor_zero(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Stateless pipeline bound to one parameter set
#[derive(Debug, Clone, Copy)]
pub struct AmmoniaPipeline<'a> {
    params: &'a ModelParameters,
    thresholds: RiskThresholds,
}

impl<'a> AmmoniaPipeline<'a> {
    /// Bind a validated parameter set
    pub fn new(params: &'a ModelParameters) -> CoreResult<Self> {
        if let Err(e) = params.validate() {
            log::warn!("Rejected model parameter set: {}", e);
            return Err(e);
        }

        log::debug!(
            "Pipeline ready (layout v{}, hash {:08x}, saturation {}, clamp [{}, {}])",
            params.layout_version,
            params.layout_hash,
            params.saturation_bound,
            params.log_floor,
            params.log_ceiling
        );

        Ok(Self {
            params,
            thresholds: RiskThresholds::default(),
        })
    }

    /// Replace the risk thresholds
    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn params(&self) -> &ModelParameters {
        self.params
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Run the full pipeline on one sample
    pub fn predict(&self, sample: &WaterSample) -> PredictionResult {
        self.trace(sample).result
    }

    /// Run the full pipeline and keep every intermediate value
    pub fn trace(&self, sample: &WaterSample) -> PredictionTrace {
        let features = engineer(sample);
        let scaled = scale(&features, self.params);
        let log_tan = predict_log_tan(&scaled, self.params);
        let tan_unfloored = invert_log1p(log_tan);
        let toxic_unfloored = toxic_ammonia(tan_unfloored, sample.temperature_c, sample.ph);

        // Classification sees the same floored value that is reported
        let toxic_nh3_mg_l = floor_zero(toxic_unfloored);
        let risk = classify_with_thresholds(toxic_nh3_mg_l, &self.thresholds);

        PredictionTrace {
            sample: *sample,
            features,
            scaled,
            log_tan,
            tan_unfloored,
            toxic_unfloored,
            result: PredictionResult {
                tan_mg_l: floor_zero(tan_unfloored),
                toxic_nh3_mg_l,
                risk,
            },
        }
    }
}

impl Default for AmmoniaPipeline<'static> {
    /// Pipeline over the embedded parameter set
    fn default() -> Self {
        Self {
            params: &*DEFAULT_PARAMETERS,
            thresholds: RiskThresholds::default(),
        }
    }
}

/// Predict with the embedded parameters
pub fn predict_ammonia_risk(temperature_c: f64, ph: f64, conductivity_us_cm: f64) -> PredictionResult {
    AmmoniaPipeline::default().predict(&WaterSample::new(temperature_c, ph, conductivity_us_cm))
}
