//! Cumulative-percentage ("ogive") curves.
//!
//! An [`OgiveCurve`] is built from bin edges and counts in one of two
//! directions:
//!
//! - **Less-than** (ascending): the percentage of the sample below each edge.
//!   Starts at `(edge_0, 0)` and ends at `(edge_k, 100)`.
//! - **Greater-than** (descending): the percentage of the sample at or above
//!   each edge. Starts at `(edge_0, 100)` and ends at `(edge_k, 0)`.
//!
//! Both curves have `k + 1` points sharing the bin edges as their x values,
//! and can be queried in either direction with linear interpolation.
//!
//! # Examples
//!
//! ```
//! use ogive_stats::curve::OgiveCurve;
//!
//! let edges = [10.0, 17.5, 25.0, 32.5, 40.0];
//! let counts = [2, 2, 2, 2];
//!
//! let less_than = OgiveCurve::less_than(&edges, &counts).unwrap();
//! assert_eq!(less_than.percentages(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
//! assert_eq!(less_than.percentage_at(25.0), 50.0);
//! assert_eq!(less_than.value_at(50.0), 25.0);
//!
//! let greater_than = OgiveCurve::greater_than(&edges, &counts).unwrap();
//! assert_eq!(greater_than.percentages(), &[100.0, 75.0, 50.0, 25.0, 0.0]);
//! ```

use serde::Serialize;

use crate::{
    OgiveError,
    binning::{self, Binning},
    interpolation,
};

/// Direction of a cumulative curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum OgiveKind {
    /// Ascending curve, percentage of the sample below `x`.
    #[display("less-than")]
    LessThan,
    /// Descending curve, percentage of the sample at or above `x`.
    #[display("greater-than")]
    GreaterThan,
}

/// Which axis a query value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryAxis {
    /// The query is a value on the x axis; the result is a percentage.
    Value,
    /// The query is a percentage; the result is a value on the x axis.
    Percentage,
}

/// A cumulative-percentage curve over bin edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgiveCurve {
    kind: OgiveKind,
    values: Vec<f64>,
    percentages: Vec<f64>,
}

impl OgiveCurve {
    /// Builds the ascending (less-than) curve.
    ///
    /// # Errors
    ///
    /// Fails if `edges` does not have exactly one more element than `counts`,
    /// if `counts` is empty, or if `counts` sums to zero.
    pub fn less_than(edges: &[f64], counts: &[u64]) -> Result<Self, OgiveError> {
        let total = binning::validated_total(edges, counts)?;

        let mut percentages = Vec::with_capacity(edges.len());
        percentages.push(0.0);
        let mut cumulative = 0;
        for &count in counts {
            cumulative += count;
            percentages.push(percentage(cumulative, total));
        }

        Ok(Self {
            kind: OgiveKind::LessThan,
            values: edges.to_vec(),
            percentages,
        })
    }

    /// Builds the descending (greater-than) curve.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::less_than`].
    pub fn greater_than(edges: &[f64], counts: &[u64]) -> Result<Self, OgiveError> {
        let total = binning::validated_total(edges, counts)?;

        // Reverse cumulative sum: samples in bin `i` and every bin after it.
        let mut remaining = total;
        let mut percentages = Vec::with_capacity(edges.len());
        for &count in counts {
            percentages.push(percentage(remaining, total));
            remaining -= count;
        }
        percentages.push(0.0);

        Ok(Self {
            kind: OgiveKind::GreaterThan,
            values: edges.to_vec(),
            percentages,
        })
    }

    /// Builds a curve of the given kind from a [`Binning`].
    pub fn from_binning(binning: &Binning, kind: OgiveKind) -> Result<Self, OgiveError> {
        match kind {
            OgiveKind::LessThan => Self::less_than(binning.edges(), binning.counts()),
            OgiveKind::GreaterThan => Self::greater_than(binning.edges(), binning.counts()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> OgiveKind {
        self.kind
    }

    /// The x coordinates (bin edges), strictly increasing.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The y coordinates in percent.
    #[must_use]
    pub fn percentages(&self) -> &[f64] {
        &self.percentages
    }

    /// Returns the curve vertices as `(value, percentage)` pairs.
    #[must_use]
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .zip(self.percentages.iter().copied())
            .collect()
    }

    /// Percentage on the curve at value `x`, clamped to the curve's span.
    #[must_use]
    pub fn percentage_at(&self, x: f64) -> f64 {
        interpolation::interp_ascending(x, &self.values, &self.percentages)
    }

    /// Value on the curve at percentage `p`, clamped to the curve's span.
    #[must_use]
    pub fn value_at(&self, p: f64) -> f64 {
        match self.kind {
            OgiveKind::LessThan => {
                interpolation::interp_ascending(p, &self.percentages, &self.values)
            }
            OgiveKind::GreaterThan => {
                interpolation::interp_descending(p, &self.percentages, &self.values)
            }
        }
    }

    /// Evaluates the curve in either direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use ogive_stats::curve::{OgiveCurve, QueryAxis};
    ///
    /// let curve = OgiveCurve::greater_than(&[0.0, 10.0, 20.0], &[1, 3]).unwrap();
    /// assert_eq!(curve.interpolate(QueryAxis::Value, 10.0), 75.0);
    /// assert_eq!(curve.interpolate(QueryAxis::Percentage, 75.0), 10.0);
    /// ```
    #[must_use]
    pub fn interpolate(&self, axis: QueryAxis, query: f64) -> f64 {
        match axis {
            QueryAxis::Value => self.percentage_at(query),
            QueryAxis::Percentage => self.value_at(query),
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn percentage(part: u64, total: u64) -> f64 {
    100.0 * part as f64 / total as f64
}
