//! Configuration module
//!
//! Heatmap defaults for the binary, overridable from the environment.
//! Unset variables fall back to `constants`; malformed ones are an error.

use std::env;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::{
    DEFAULT_CONDUCTIVITY, DEFAULT_HEATMAP_STEPS, DEFAULT_PH_RANGE, DEFAULT_TEMPERATURE_RANGE,
    ENV_CONDUCTIVITY, ENV_HEATMAP_STEPS, ENV_PH_RANGE, ENV_TEMPERATURE_RANGE,
};
use crate::error::{CoreError, CoreResult};
use crate::logic::heatmap::ValueRange;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Heatmap temperature axis (°C)
    pub temperature_range: ValueRange,

    /// Heatmap pH axis
    pub ph_range: ValueRange,

    /// Fixed conductivity for the heatmap (µS/cm)
    pub conductivity_us_cm: f64,

    /// Cells per heatmap axis
    pub heatmap_steps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            temperature_range: DEFAULT_TEMPERATURE_RANGE.into(),
            ph_range: DEFAULT_PH_RANGE.into(),
            conductivity_us_cm: DEFAULT_CONDUCTIVITY,
            heatmap_steps: DEFAULT_HEATMAP_STEPS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            temperature_range: parse_or(&lookup, ENV_TEMPERATURE_RANGE, defaults.temperature_range)?,
            ph_range: parse_or(&lookup, ENV_PH_RANGE, defaults.ph_range)?,
            conductivity_us_cm: parse_or(&lookup, ENV_CONDUCTIVITY, defaults.conductivity_us_cm)?,
            heatmap_steps: parse_or(&lookup, ENV_HEATMAP_STEPS, defaults.heatmap_steps)?,
        };

        log::debug!("Resolved config: {:?}", config);
        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> CoreResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| CoreError::InvalidConfig {
            key: key.to_string(),
            value: raw,
        }),
    }
}
