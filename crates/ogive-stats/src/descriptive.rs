use serde::Serialize;

use crate::{percentiles, sample::Sample};

/// Descriptive statistics summarizing a sample.
///
/// This structure contains common measures of central tendency and
/// dispersion for a [`Sample`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// The number of values in the sample.
    pub count: usize,
    /// The minimum value in the sample.
    pub min: f64,
    /// The maximum value in the sample.
    pub max: f64,
    /// The arithmetic mean (average) of the sample.
    pub mean: f64,
    /// The median of the sample, interpolated between the two middle values
    /// for even lengths.
    pub median: f64,
    /// The population variance of the sample.
    pub variance: f64,
    /// The population standard deviation of the sample.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics of a sample.
    ///
    /// A sample is never empty, so this always succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ogive_stats::{descriptive::DescriptiveStats, sample::Sample};
    /// let sample = Sample::new(vec![5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// let stats = DescriptiveStats::from_sample(&sample);
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, 2.0);
    /// ```
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        Self::from_sorted(&sample.sorted())
    }

    /// Computes descriptive statistics from pre-sorted, non-empty values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is empty or not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(!sorted_values.is_empty(), "values must not be empty");
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;

        Self {
            count,
            min: sorted_values[0],
            max: sorted_values[count - 1],
            mean,
            median: percentiles::compute_percentile(sorted_values, 50.0),
            variance,
            std_dev: variance.sqrt(),
        }
    }

    /// Difference between the largest and smallest value.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_length_median() {
        let sample = Sample::new(vec![4.0, 1.0, 3.0, 2.0]).unwrap();
        let stats = DescriptiveStats::from_sample(&sample);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.range(), 3.0);
    }

    #[test]
    fn test_constant_sample_has_zero_spread() {
        let sample = Sample::new(vec![50.0; 3]).unwrap();
        let stats = DescriptiveStats::from_sample(&sample);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.range(), 0.0);
    }

    #[test]
    fn test_std_dev() {
        let sample = Sample::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        let stats = DescriptiveStats::from_sample(&sample);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 2.0);
    }
}
