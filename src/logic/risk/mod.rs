//! Risk Module
//!
//! Phân loại nguy cơ dựa trên nồng độ NH3 độc.
//!
//! ## Structure
//! - `types`: RiskTier
//! - `rules`: Thresholds and constants
//! - `classifier`: Classification logic
//!
//! ## Usage
//! ```
//! use ammonia_risk_core::logic::risk::{classify, RiskTier};
//!
//! assert_eq!(classify(0.05), RiskTier::Warning);
//! ```

pub mod types;
pub mod rules;
pub mod classifier;

pub use types::RiskTier;
pub use rules::{RiskThresholds, CRITICAL_THRESHOLD, WARNING_THRESHOLD};
pub use classifier::{classify, classify_with_thresholds};
