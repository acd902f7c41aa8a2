//! Risk Classification Rules & Thresholds
//!
//! KHÔNG chứa logic classify - chỉ constants và config.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS (toxic NH3, mg/L)
// ============================================================================

/// At or above this = Warning
pub const WARNING_THRESHOLD: f64 = 0.05;

/// At or above this = Critical
pub const CRITICAL_THRESHOLD: f64 = 0.34;

/// Thresholds for classification (configurable)
///
/// Each tier's lower bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Below this = Safe
    pub warning_min: f64,
    /// Below this = Warning, at or above = Critical
    pub critical_min: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            warning_min: WARNING_THRESHOLD,
            critical_min: CRITICAL_THRESHOLD,
        }
    }
}
