//! Features Module - Feature Engineering
//!
//! Tách logic tạo features khỏi model.
//! Layout (order + version) is shared with the scaler and the surrogate.

pub mod layout;
pub mod vector;


// Re-export common types
pub use layout::{
    compute_layout_hash, feature_index, feature_name, validate_layout, LayoutInfo,
    FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION,
};
pub use vector::{engineer, FeatureVector};
