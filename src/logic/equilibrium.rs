//! Emerson Equilibrium - TAN → unionized NH3
//!
//! Công thức vật lý chính xác, không phải xấp xỉ. Constants must match
//! exactly; any drift moves results across the risk boundaries.
//!
//! ```text
//! pKa      = 0.09018 + 2729.92 / T(K)
//! fraction = 1 / (1 + 10^(pKa - pH))
//! NH3      = TAN * fraction
//! ```

/// Celsius → Kelvin offset
pub const KELVIN_OFFSET: f64 = 273.15;

/// Emerson pKa intercept
pub const PKA_INTERCEPT: f64 = 0.09018;

/// Emerson pKa temperature coefficient (K)
pub const PKA_TEMPERATURE_COEFF: f64 = 2729.92;

/// Temperature-dependent pKa of NH4+
pub fn pka(temperature_c: f64) -> f64 {
    let kelvin = temperature_c + KELVIN_OFFSET;
    PKA_INTERCEPT + PKA_TEMPERATURE_COEFF / kelvin
}

/// Unionized fraction of TAN; strictly increasing in pH and temperature
pub fn unionized_fraction(temperature_c: f64, ph: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf(pka(temperature_c) - ph))
}

/// Toxic (unionized) ammonia in mg/L
pub fn toxic_ammonia(tan_mg_l: f64, temperature_c: f64, ph: f64) -> f64 {
    tan_mg_l * unionized_fraction(temperature_c, ph)
}
