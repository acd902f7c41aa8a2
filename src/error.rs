//! Error handling
//!
//! The prediction path itself never fails. These errors only come from
//! surfaces that accept external input: parameter sets, ranges, config.

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    // Parameter set errors
    #[error("Invalid model parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error(
        "Feature layout mismatch: expected v{expected_version} (hash: {expected_hash:08x}), \
         got v{actual_version} (hash: {actual_hash:08x})"
    )]
    LayoutMismatch {
        expected_version: u8,
        expected_hash: u32,
        actual_version: u8,
        actual_hash: u32,
    },

    // Input parsing errors
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid config value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },
}

impl CoreError {
    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
