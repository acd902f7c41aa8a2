//! Logic Module - Prediction Engines
//!
//! Chứa các stage của pipeline: Features, Model, Equilibrium, Risk.
//!
//! ## Architecture
//! - `features/` - Feature engineering (raw sample -> 5 ordered features)
//! - `model/` - Fixed parameter set, standardizer, analytic surrogate
//! - `equilibrium` - Emerson TAN -> unionized NH3 conversion
//! - `risk/` - Three-tier risk classification
//! - `pipeline` - Orchestration of the stages above
//! - `heatmap` - Batch evaluation over a temperature × pH grid

pub mod sample;
pub mod features;
pub mod model;
pub mod equilibrium;
pub mod risk;
pub mod pipeline;
pub mod heatmap;
