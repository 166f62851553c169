//! Descriptive statistics over grid samples.

use serde::{Deserialize, Serialize};

/// Min / max / mean / population standard deviation for a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub std_dev: f64,
}

impl Stats {
    /// Range of the samples (max − min).
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

/// Computes [`Stats`] over a slice.
///
/// Standard deviation is the population form (divide by N, not N−1):
/// a grid of sample points is the whole population being judged, not a
/// sample from one. An empty slice yields the all-zero struct.
pub fn stats(values: &[f64]) -> Stats {
    if values.is_empty() {
        return Stats::default();
    }

    let n = values.len() as f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    let avg = sum / n;

    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / n;

    Stats {
        min,
        max,
        avg,
        std_dev: variance.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_empty_is_all_zero() {
        let s = stats(&[]);
        assert_eq!(s, Stats::default());
        assert_eq!(s.spread(), 0.0);
    }

    #[test]
    fn test_stats_single_value() {
        let s = stats(&[72.5]);
        assert_eq!(s.min, 72.5);
        assert_eq!(s.max, 72.5);
        assert_eq!(s.avg, 72.5);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn test_stats_population_std_dev() {
        // Classic population example: σ = 2, not the sample σ ≈ 2.138
        let s = stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(s.avg, 5.0);
        assert!((s.std_dev - 2.0).abs() < 1e-12);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
        assert_eq!(s.spread(), 7.0);
    }
}
