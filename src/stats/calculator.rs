//! Statistics Calculator Module
//! Descriptive statistics for review-score distributions.

use statrs::statistics::Statistics;

/// Whisker reach as a multiple of the interquartile range.
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Five-number summary plus whiskers and outliers, as drawn by a boxplot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Lowest value within `q1 - 1.5 * IQR`.
    pub whisker_low: f64,
    /// Highest value within `q3 + 1.5 * IQR`.
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

pub struct StatsCalculator;

impl StatsCalculator {
    /// Arithmetic mean, `None` for an empty slice.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(Statistics::mean(values))
    }

    /// Boxplot summary, `None` for an empty slice.
    pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let q1 = Self::percentile(&sorted, 25.0);
        let median = Self::percentile(&sorted, 50.0);
        let q3 = Self::percentile(&sorted, 75.0);
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR_FACTOR * iqr;
        let high_fence = q3 + WHISKER_IQR_FACTOR * iqr;

        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < low_fence || v > high_fence)
            .collect();

        Some(BoxSummary {
            count: sorted.len(),
            mean: Statistics::mean(values),
            min: Statistics::min(values),
            q1,
            median,
            q3,
            max: Statistics::max(values),
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_missing() {
        assert_eq!(StatsCalculator::mean(&[]), None);
    }

    #[test]
    fn test_mean_known() {
        let mean = StatsCalculator::mean(&[2.0, 4.0, 6.0]).unwrap();
        assert!((mean - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_percentile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!((StatsCalculator::percentile(&sorted, 25.0) - 1.75).abs() < 1e-10);
        assert!((StatsCalculator::percentile(&sorted, 50.0) - 2.5).abs() < 1e-10);
        assert!(StatsCalculator::percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_box_summary_flags_outliers() {
        // q1 = 4, q3 = 5, fences at 2.5 and 6.5
        let scores = [5.0, 5.0, 4.0, 5.0, 1.0, 4.0, 5.0, 4.0];
        let summary = StatsCalculator::box_summary(&scores).unwrap();

        assert_eq!(summary.count, 8);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert!((summary.q1 - 4.0).abs() < 1e-10);
        assert!((summary.median - 4.5).abs() < 1e-10);
        assert!((summary.q3 - 5.0).abs() < 1e-10);
        assert_eq!(summary.whisker_low, 4.0);
        assert_eq!(summary.whisker_high, 5.0);
        assert_eq!(summary.outliers, vec![1.0]);
    }

    #[test]
    fn test_box_summary_single_value() {
        let summary = StatsCalculator::box_summary(&[3.0]).unwrap();
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.whisker_low, 3.0);
        assert!(summary.outliers.is_empty());
        assert!(StatsCalculator::box_summary(&[]).is_none());
    }
}
