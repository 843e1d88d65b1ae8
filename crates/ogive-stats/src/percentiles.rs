use serde::Serialize;

use crate::sample::Sample;

/// Precomputed percentile values for a sample.
///
/// This structure stores percentile-value pairs for efficient lookup
/// of commonly used percentile points such as the quartiles.
///
/// # Examples
///
/// ```
/// use ogive_stats::{percentiles::Percentiles, sample::Sample};
///
/// let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]).unwrap();
/// let percentiles = Percentiles::from_sample(&sample, &[25.0, 50.0, 75.0]);
///
/// assert_eq!(percentiles.get(25.0), Some(3.25));
/// assert_eq!(percentiles.get(50.0), Some(5.5));
/// assert_eq!(percentiles.get(75.0), Some(7.75));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Percentiles {
    /// Percentile-value pairs in the order they were requested.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let values = percentile_points
            .iter()
            .map(|&p| (p, compute_percentile(sorted_values, p)))
            .collect();
        Self { values }
    }

    /// Computes percentiles of a sample.
    #[must_use]
    pub fn from_sample(sample: &Sample, percentile_points: &[f64]) -> Self {
        Self::from_sorted(&sample.sorted(), percentile_points)
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.values
    }
}

/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between the two closest ranks: the k-th
/// percentile sits at fractional rank `k / 100 * (n - 1)`. Percentiles
/// outside `[0, 100]` are clamped.
///
/// Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use ogive_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(compute_percentile(&values, 50.0), 2.5);
/// assert_eq!(compute_percentile(&values, 0.0), 1.0);
/// assert_eq!(compute_percentile(&values, 100.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    let Some(&first) = sorted_values.first() else {
        return f64::NAN;
    };
    if sorted_values.len() == 1 {
        return first;
    }

    let rank = percentile.clamp(0.0, 100.0) / 100.0 * (sorted_values.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let weight = rank - lo as f64;
    sorted_values[lo] + (sorted_values[hi] - sorted_values[lo]) * weight
}
