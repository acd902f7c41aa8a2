//! Heatmap - Batch evaluation over a temperature × pH grid
//!
//! Row = temperature index, column = pH index, conductivity fixed.
//! Cells are independent and evaluated in parallel; each result is written
//! to its own index so completion order never affects placement.

use std::str::FromStr;

use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::logic::pipeline::{AmmoniaPipeline, PredictionResult};
use crate::logic::risk::RiskTier;
use crate::logic::sample::WaterSample;

// ============================================================================
// RANGE
// ============================================================================

/// Inclusive axis range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub lo: f64,
    pub hi: f64,
}

impl ValueRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// i-th of `steps` evenly spaced samples, both endpoints included.
    ///
    /// `steps <= 1` is degenerate and always yields `lo`.
    pub fn sample(&self, index: usize, steps: usize) -> f64 {
        if steps <= 1 {
            return self.lo;
        }
        if index + 1 == steps {
            return self.hi;
        }
        self.lo + (self.hi - self.lo) * index as f64 / (steps - 1) as f64
    }
}

impl From<[f64; 2]> for ValueRange {
    fn from(range: [f64; 2]) -> Self {
        Self::new(range[0], range[1])
    }
}

impl From<(f64, f64)> for ValueRange {
    fn from(range: (f64, f64)) -> Self {
        Self::new(range.0, range.1)
    }
}

impl FromStr for ValueRange {
    type Err = CoreError;

    /// Accepts `lo..hi` or `lo,hi`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lo, hi) = s
            .split_once("..")
            .or_else(|| s.split_once(','))
            .ok_or_else(|| CoreError::InvalidRange(format!("expected `lo..hi`, got {:?}", s)))?;

        let parse = |part: &str| -> Result<f64, CoreError> {
            let value: f64 = part
                .trim()
                .parse()
                .map_err(|_| CoreError::InvalidRange(format!("not a number: {:?}", part.trim())))?;
            if !value.is_finite() {
                return Err(CoreError::InvalidRange(format!("not finite: {:?}", part.trim())));
            }
            Ok(value)
        };

        Ok(Self::new(parse(lo)?, parse(hi)?))
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.lo, self.hi)
    }
}

// ============================================================================
// GRID
// ============================================================================

/// One grid point and its prediction
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatmapCell {
    #[serde(rename = "temperature")]
    pub temperature_c: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    #[serde(flatten)]
    pub result: PredictionResult,
}

/// Cell count per risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskCounts {
    pub safe: usize,
    pub warning: usize,
    pub critical: usize,
}

impl RiskCounts {
    pub fn total(&self) -> usize {
        self.safe + self.warning + self.critical
    }
}

/// `steps × steps` grid, row-major by temperature then pH
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    cells: Array2<HeatmapCell>,
}

impl HeatmapGrid {
    /// Cells per axis
    pub fn steps(&self) -> usize {
        self.cells.nrows()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&HeatmapCell> {
        self.cells.get((row, col))
    }

    pub fn as_array(&self) -> &Array2<HeatmapCell> {
        &self.cells
    }

    /// Row-major iteration over all cells
    pub fn iter(&self) -> impl Iterator<Item = &HeatmapCell> {
        self.cells.iter()
    }

    /// Nested rows for serialization
    pub fn to_nested(&self) -> Vec<Vec<HeatmapCell>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    pub fn risk_counts(&self) -> RiskCounts {
        let mut counts = RiskCounts::default();
        for cell in self.cells.iter() {
            match cell.result.risk {
                RiskTier::Safe => counts.safe += 1,
                RiskTier::Warning => counts.warning += 1,
                RiskTier::Critical => counts.critical += 1,
            }
        }
        counts
    }

    /// Highest toxic NH3 in the grid, ignoring NaN
    pub fn max_toxic(&self) -> Option<f64> {
        self.cells
            .iter()
            .map(|cell| cell.result.toxic_nh3_mg_l)
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

impl<'a> AmmoniaPipeline<'a> {
    /// Evaluate the pipeline over a `steps × steps` grid in parallel
    pub fn heatmap(
        &self,
        temperature_range: ValueRange,
        ph_range: ValueRange,
        conductivity_us_cm: f64,
        steps: usize,
    ) -> HeatmapGrid {
        let mut cells = Array2::<HeatmapCell>::default((steps, steps));

        Zip::indexed(&mut cells).par_for_each(|(row, col), cell| {
            let temperature_c = temperature_range.sample(row, steps);
            let ph = ph_range.sample(col, steps);
            let result = self.predict(&WaterSample::new(temperature_c, ph, conductivity_us_cm));

            *cell = HeatmapCell {
                temperature_c,
                ph,
                result,
            };
        });

        HeatmapGrid { cells }
    }
}

/// Grid over the embedded parameters
pub fn generate_heatmap(
    temperature_range: ValueRange,
    ph_range: ValueRange,
    conductivity_us_cm: f64,
    steps: usize,
) -> HeatmapGrid {
    AmmoniaPipeline::default().heatmap(temperature_range, ph_range, conductivity_us_cm, steps)
}

/// Boundary form: plain `[lo, hi]` ranges, nested rows out
pub fn generate_heatmap_data(
    temperature_range: [f64; 2],
    ph_range: [f64; 2],
    conductivity_us_cm: f64,
    steps: usize,
) -> Vec<Vec<HeatmapCell>> {
    generate_heatmap(temperature_range.into(), ph_range.into(), conductivity_us_cm, steps).to_nested()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_sample_endpoints() {
        let range = ValueRange::new(5.0, 40.0);
        assert_eq!(range.sample(0, 8), 5.0);
        assert_eq!(range.sample(7, 8), 40.0);
        assert_eq!(range.sample(1, 8), 10.0);
    }

    #[test]
    fn test_range_sample_degenerate() {
        let range = ValueRange::new(0.1, 0.3);
        assert_eq!(range.sample(0, 1), 0.1);
        assert_eq!(range.sample(3, 1), 0.1);
        assert_eq!(range.sample(0, 0), 0.1);
        assert_eq!(range.sample(1, 2), 0.3);
    }

    #[test]
    fn test_range_parse() {
        assert_eq!("5..40".parse::<ValueRange>().unwrap(), ValueRange::new(5.0, 40.0));
        assert_eq!(" 6.5 , 9 ".parse::<ValueRange>().unwrap(), ValueRange::new(6.5, 9.0));
        assert!("5-40".parse::<ValueRange>().is_err());
        assert!("a..b".parse::<ValueRange>().is_err());
        assert!("0..inf".parse::<ValueRange>().is_err());
        assert_eq!(ValueRange::new(5.0, 40.0).to_string(), "5..40");
    }

    #[test]
    fn test_grid_shape_and_corners() {
        let grid = generate_heatmap(ValueRange::new(5.0, 40.0), ValueRange::new(5.0, 10.0), 1200.0, 6);

        assert_eq!(grid.steps(), 6);
        assert_eq!(grid.as_array().ncols(), 6);

        let first = grid.get(0, 0).unwrap();
        assert_eq!((first.temperature_c, first.ph), (5.0, 5.0));

        let last = grid.get(5, 5).unwrap();
        assert_eq!((last.temperature_c, last.ph), (40.0, 10.0));

        assert!(grid.get(6, 0).is_none());
    }

    #[test]
    fn test_row_major_by_temperature() {
        let grid = generate_heatmap(ValueRange::new(10.0, 30.0), ValueRange::new(6.0, 9.0), 800.0, 3);

        for row in 0..3 {
            for col in 0..3 {
                let cell = grid.get(row, col).unwrap();
                assert_eq!(cell.temperature_c, [10.0, 20.0, 30.0][row]);
                assert_eq!(cell.ph, [6.0, 7.5, 9.0][col]);
            }
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pipeline = AmmoniaPipeline::default();
        let t = ValueRange::new(5.0, 40.0);
        let p = ValueRange::new(5.0, 10.0);
        let grid = pipeline.heatmap(t, p, 2000.0, 12);

        for row in 0..12 {
            for col in 0..12 {
                let expected = pipeline.predict(&WaterSample::new(t.sample(row, 12), p.sample(col, 12), 2000.0));
                let cell = grid.get(row, col).unwrap();
                assert_eq!(cell.result.tan_mg_l.to_bits(), expected.tan_mg_l.to_bits());
                assert_eq!(cell.result.toxic_nh3_mg_l.to_bits(), expected.toxic_nh3_mg_l.to_bits());
                assert_eq!(cell.result.risk, expected.risk);
            }
        }
    }

    #[test]
    fn test_single_step_grid() {
        let grid = generate_heatmap(ValueRange::new(20.0, 35.0), ValueRange::new(7.0, 9.0), 1000.0, 1);
        assert_eq!(grid.steps(), 1);

        let cell = grid.get(0, 0).unwrap();
        assert_eq!((cell.temperature_c, cell.ph), (20.0, 7.0));
    }

    #[test]
    fn test_zero_steps_is_empty() {
        let grid = generate_heatmap(ValueRange::new(20.0, 35.0), ValueRange::new(7.0, 9.0), 1000.0, 0);
        assert_eq!(grid.steps(), 0);
        assert!(grid.to_nested().is_empty());
        assert_eq!(grid.max_toxic(), None);
    }

    #[test]
    fn test_risk_counts_and_max() {
        let grid = generate_heatmap(ValueRange::new(5.0, 40.0), ValueRange::new(5.0, 10.0), 2900.0, 10);
        let counts = grid.risk_counts();

        assert_eq!(counts.total(), 100);
        assert!(counts.safe > 0);
        assert!(counts.critical > 0);

        let max = grid.max_toxic().unwrap();
        assert!(grid.iter().all(|c| c.result.toxic_nh3_mg_l <= max));
    }

    #[test]
    fn test_boundary_data_shape() {
        let data = generate_heatmap_data([5.0, 40.0], [5.0, 10.0], 1200.0, 4);
        assert_eq!(data.len(), 4);
        assert!(data.iter().all(|row| row.len() == 4));

        let json = serde_json::to_value(&data[0][0]).unwrap();
        for key in ["temperature", "pH", "TAN", "toxicNH3", "risk"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
