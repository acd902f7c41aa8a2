//! Model Module - Scaler + Analytic Surrogate
//!
//! Tách logic model khỏi features và physics.
//! Parameters are injected by reference; swap the set to swap the model.

pub mod params;
pub mod scaler;
pub mod surrogate;

// Re-export common types
pub use params::{ModelParameters, DEFAULT_PARAMETERS};
pub use scaler::{scale, ScaledFeatureVector};
pub use surrogate::{invert_log1p, predict_log_tan};
