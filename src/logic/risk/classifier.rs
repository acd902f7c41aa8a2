//! Risk Classifier
//!
//! Pure total function of toxic NH3. Boundaries are half-open on the
//! lower bound of each tier: exactly 0.05 is Warning, exactly 0.34 is Critical.

use super::rules::RiskThresholds;
use super::types::RiskTier;

/// Classify with the default thresholds
pub fn classify(toxic_nh3: f64) -> RiskTier {
    classify_with_thresholds(toxic_nh3, &RiskThresholds::default())
}

/// Classification with custom thresholds
///
/// NaN fails both comparisons and lands in Critical.
pub fn classify_with_thresholds(toxic_nh3: f64, thresholds: &RiskThresholds) -> RiskTier {
    if toxic_nh3 < thresholds.warning_min {
        RiskTier::Safe
    } else if toxic_nh3 < thresholds.critical_min {
        RiskTier::Warning
    } else {
        RiskTier::Critical
    }
}
