//! Ammonia Risk Core - Offline Toxicity Prediction
//!
//! Ước tính nguy cơ NH3 từ nhiệt độ, pH và độ dẫn điện - không cần mạng,
//! không cần cảm biến amoniac.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        PREDICTION PIPELINE                       │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  WaterSample ─▶ features ─▶ scaler ─▶ surrogate ─▶ expm1         │
//! │                                                  │               │
//! │                                                  ▼               │
//! │                     risk classifier ◀── Emerson equilibrium      │
//! └──────────────────────────────────────────────────────────────────┘
//!            ▲
//!            └── heatmap: temperature × pH grid, evaluated in parallel
//! ```
//!
//! The pipeline is pure: no I/O, no logging, no shared mutable state.
//! Model parameters are compiled in and injected by reference.

pub mod config;
pub mod constants;
pub mod error;
pub mod logic;

pub use error::{CoreError, CoreResult};
pub use logic::heatmap::{
    generate_heatmap, generate_heatmap_data, HeatmapCell, HeatmapGrid, ValueRange,
};
pub use logic::model::{ModelParameters, DEFAULT_PARAMETERS};
pub use logic::pipeline::{predict_ammonia_risk, AmmoniaPipeline, PredictionResult};
pub use logic::risk::RiskTier;
pub use logic::sample::WaterSample;
