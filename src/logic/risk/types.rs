//! Risk Types
//!
//! Core types cho risk classification.
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

/// Ammonia risk tiers, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    /// NH3 below chronic exposure concern
    #[default]
    Safe,
    /// Sub-lethal stress, cần theo dõi
    Warning,
    /// Acute toxicity, cần xử lý ngay
    Critical,
}

impl RiskTier {
    /// All tiers in severity order
    pub const ALL: [RiskTier; 3] = [RiskTier::Safe, RiskTier::Warning, RiskTier::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Safe => "SAFE",
            RiskTier::Warning => "WARNING",
            RiskTier::Critical => "CRITICAL",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskTier::Safe => 0,
            RiskTier::Warning => 1,
            RiskTier::Critical => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Safe => "#10b981",     // Green
            RiskTier::Warning => "#f59e0b",  // Yellow
            RiskTier::Critical => "#ef4444", // Red
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(RiskTier::Safe < RiskTier::Warning);
        assert!(RiskTier::Warning < RiskTier::Critical);
        for tier in RiskTier::ALL {
            assert_eq!(RiskTier::ALL[tier.severity_level() as usize], tier);
        }
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&RiskTier::Warning).unwrap(), "\"WARNING\"");
        let tier: RiskTier = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert_eq!(tier, RiskTier::Critical);
        assert_eq!(RiskTier::Safe.to_string(), "SAFE");
    }
}
