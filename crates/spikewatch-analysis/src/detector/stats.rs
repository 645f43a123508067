//! Batch summary statistics.

use serde::{Deserialize, Serialize};

/// Count, mean, population standard deviation, and range of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divides by `count`, not `count - 1`).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Two passes: sum and range, then squared deviations from the mean.
    /// Returns `None` for an empty slice.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        let mut mean = sum / n;
        let mut std_dev = deviation(values, mean, 1.0);

        // Finite input whose sum or squared deviations overflow: redo both
        // passes on values scaled into [-1, 1].
        let scale = min.abs().max(max.abs());
        if scale.is_finite() && scale > 0.0 && !(mean.is_finite() && std_dev.is_finite()) {
            let scaled_mean = values.iter().map(|v| v / scale).sum::<f64>() / n;
            mean = scaled_mean * scale;
            std_dev = deviation(values, scaled_mean, scale) * scale;
        }

        Some(Self {
            count: values.len(),
            mean,
            std_dev,
            min,
            max,
        })
    }

    /// All values identical, so there is no spread to score against.
    ///
    /// Checked on the range rather than `std_dev == 0.0`: rounding in the
    /// mean can leave a tiny non-zero deviation for a constant series.
    pub fn is_constant(&self) -> bool {
        self.min == self.max || self.std_dev == 0.0
    }

    /// Standard score of `value` against these statistics.
    pub fn z_score(&self, value: f64) -> f64 {
        (value - self.mean) / self.std_dev
    }
}

/// Population standard deviation of `values / scale` around `mean`, which
/// is already expressed in scaled units.
fn deviation(values: &[f64], mean: f64, scale: f64) -> f64 {
    let n = values.len() as f64;
    let variance = values
        .iter()
        .map(|v| (v / scale - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_none() {
        assert!(SummaryStats::compute(&[]).is_none());
    }

    #[test]
    fn test_population_std_dev() {
        let stats = SummaryStats::compute(&[0.0, 0.0, 0.0, 0.0, 100.0]).unwrap();
        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 20.0);
        assert_eq!(stats.std_dev, 40.0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 100.0);
        assert_eq!(stats.z_score(100.0), 2.0);
    }

    #[test]
    fn test_constant_with_rounding_mean() {
        let stats = SummaryStats::compute(&[0.1, 0.1, 0.1]).unwrap();
        assert!(stats.is_constant());
    }

    #[test]
    fn test_single_value_is_constant() {
        let stats = SummaryStats::compute(&[42.0]).unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert!(stats.is_constant());
    }

    #[test]
    fn test_large_magnitudes_stay_finite() {
        let stats = SummaryStats::compute(&[1e200, 1e200, 1e200, 1e200, -1e200]).unwrap();
        assert!(stats.mean.is_finite());
        assert!(stats.std_dev.is_finite());
        assert!((stats.mean / 6e199 - 1.0).abs() < 1e-12);
        assert!((stats.std_dev / 8e199 - 1.0).abs() < 1e-12);
        assert!((stats.z_score(-1e200) + 2.0).abs() < 1e-12);
    }
}
