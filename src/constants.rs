//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default heatmap window, only edit this file.

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Ammonia Risk";

/// Default temperature window for the heatmap (°C)
///
/// Matches the physical domain the caller is expected to validate against.
pub const DEFAULT_TEMPERATURE_RANGE: (f64, f64) = (5.0, 40.0);

/// Default pH window for the heatmap
pub const DEFAULT_PH_RANGE: (f64, f64) = (5.0, 10.0);

/// Default fixed conductivity for the heatmap (µS/cm)
pub const DEFAULT_CONDUCTIVITY: f64 = 1200.0;

/// Default heatmap resolution (steps per axis)
pub const DEFAULT_HEATMAP_STEPS: usize = 20;

// ============================================
// Environment variable names
// ============================================

pub const ENV_TEMPERATURE_RANGE: &str = "AMMONIA_TEMPERATURE_RANGE";
pub const ENV_PH_RANGE: &str = "AMMONIA_PH_RANGE";
pub const ENV_CONDUCTIVITY: &str = "AMMONIA_CONDUCTIVITY";
pub const ENV_HEATMAP_STEPS: &str = "AMMONIA_HEATMAP_STEPS";
