//! Equal-width binning over the closed range of a sample.
//!
//! This module partitions `[min, max]` of a [`Sample`] into `k` bins of equal
//! width and counts how many values fall into each one. Bins are half-open,
//! `[edge_i, edge_{i+1})`, except the last which is closed on both ends so
//! that the maximum value is counted.
//!
//! # Degenerate samples
//!
//! When every value in the sample is equal the range has zero width. Instead
//! of producing zero-width bins, the range is widened to
//! `[value - 0.5, value + 0.5]` (see [`DEGENERATE_HALF_WIDTH`]) and binning
//! proceeds as usual. All values then land in the bin that contains the
//! centre of the widened range. For values so large that `0.5` is below their
//! precision, the half-width grows to a few units in the last place.
//!
//! Edges are computed without forming `max - min`, so ranges spanning most of
//! the `f64` domain stay finite. A range too narrow to hold `k + 1` distinct
//! edges at the values' precision is rejected with
//! [`OgiveError::IndistinctEdges`].
//!
//! # Examples
//!
//! ```
//! use ogive_stats::{binning::Binning, sample::Sample};
//!
//! let sample = Sample::new(vec![10.0, 10.0, 20.0, 20.0, 30.0, 30.0, 40.0, 40.0]).unwrap();
//! let binning = Binning::new(&sample, 4).unwrap();
//!
//! assert_eq!(binning.edges(), &[10.0, 17.5, 25.0, 32.5, 40.0]);
//! assert_eq!(binning.counts(), &[2, 2, 2, 2]);
//! assert_eq!(binning.total(), 8);
//! ```

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::{OgiveError, sample::Sample};

/// Half of the fallback range width used when all sample values are equal.
pub const DEGENERATE_HALF_WIDTH: f64 = 0.5;

/// Bin edges and per-bin counts of a sample.
///
/// `edges` always has exactly one more element than `counts`, is strictly
/// increasing, and `counts` sums to the sample length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binning {
    edges: Vec<f64>,
    counts: Vec<u64>,
    degenerate: bool,
}

impl Binning {
    /// Bins `sample` into `bin_count` equal-width bins.
    ///
    /// # Errors
    ///
    /// Returns [`OgiveError::ZeroBinCount`] if `bin_count` is zero, and
    /// [`OgiveError::IndistinctEdges`] if the value range cannot hold
    /// `bin_count + 1` strictly increasing finite edges.
    pub fn new(sample: &Sample, bin_count: usize) -> Result<Self, OgiveError> {
        if bin_count == 0 {
            return Err(OgiveError::ZeroBinCount);
        }

        let (range, degenerate) = value_range(sample, bin_count);
        let edges = equal_width_edges(&range, bin_count);
        let strictly_increasing = edges.iter().all(|edge| edge.is_finite())
            && edges.is_sorted_by(|a, b| a < b);
        if !strictly_increasing {
            return Err(OgiveError::IndistinctEdges { bins: bin_count });
        }

        let mut counts = vec![0; bin_count];
        for &value in sample.iter() {
            counts[locate(&edges, value)] += 1;
        }

        Ok(Self {
            edges,
            counts,
            degenerate,
        })
    }

    /// The `k + 1` bin boundaries.
    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// The `k` per-bin counts.
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of bins.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Total number of values counted, equal to the sample length.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Width shared by every bin.
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Whether the range was widened because all values were equal.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Returns the index of the bin that would hold `value`, or `None` if it
    /// lies outside the binned range.
    #[must_use]
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        let first = *self.edges.first()?;
        let last = *self.edges.last()?;
        (first..=last)
            .contains(&value)
            .then(|| locate(&self.edges, value))
    }
}

/// Checks that `edges` and `counts` describe the same bins and returns the
/// total count.
pub(crate) fn validated_total(edges: &[f64], counts: &[u64]) -> Result<u64, OgiveError> {
    if counts.is_empty() {
        return Err(OgiveError::ZeroBinCount);
    }
    if edges.len() != counts.len() + 1 {
        return Err(OgiveError::EdgeCountMismatch {
            bins: counts.len(),
            expected: counts.len() + 1,
            actual: edges.len(),
        });
    }
    match counts.iter().sum::<u64>() {
        0 => Err(OgiveError::ZeroTotal),
        total => Ok(total),
    }
}

#[expect(clippy::cast_precision_loss)]
fn value_range(sample: &Sample, bin_count: usize) -> (RangeInclusive<f64>, bool) {
    let min = sample.min();
    let max = sample.max();
    if min < max {
        return (min..=max, false);
    }
    // `0.5` vanishes next to values beyond 2^53; keep each bin a few ulps wide.
    let half_width = DEGENERATE_HALF_WIDTH.max(min.abs() * f64::EPSILON * bin_count as f64);
    ((min - half_width)..=(max + half_width), true)
}

#[expect(clippy::cast_precision_loss)]
fn equal_width_edges(range: &RangeInclusive<f64>, bin_count: usize) -> Vec<f64> {
    let (min, max) = (*range.start(), *range.end());
    let k = bin_count as f64;
    // Dividing before subtracting keeps the step finite for any finite range.
    let width = max / k - min / k;
    let mut edges = (0..bin_count)
        .map(|i| min + i as f64 * width)
        .collect::<Vec<_>>();
    // Pin the last edge so the maximum is never lost to rounding.
    edges.push(max);
    edges
}

/// Finds the bin for a value known to lie within `[edges[0], edges[k]]`.
fn locate(edges: &[f64], value: f64) -> usize {
    let last_bin = edges.len() - 2;
    // Index of the last edge <= value; the maximum falls into the closed last bin.
    edges
        .partition_point(|&edge| edge <= value)
        .saturating_sub(1)
        .min(last_bin)
}
