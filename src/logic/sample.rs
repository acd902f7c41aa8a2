//! Water Sample - Raw caller-supplied measurements

use serde::{Deserialize, Serialize};

/// One water measurement.
///
/// The core does not enforce the physical domain (5-40 °C, pH 5-10,
/// 50-3000 µS/cm); out-of-domain values are extrapolated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterSample {
    pub temperature_c: f64,
    pub ph: f64,
    pub conductivity_us_cm: f64,
}

impl WaterSample {
    pub fn new(temperature_c: f64, ph: f64, conductivity_us_cm: f64) -> Self {
        Self {
            temperature_c,
            ph,
            conductivity_us_cm,
        }
    }
}
