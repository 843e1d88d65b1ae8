//! Per-bin frequency report.
//!
//! A [`FrequencyTable`] has one [`FrequencyRow`] per bin, in bin order. Each
//! row carries the class interval, its count, the relative frequency, and the
//! running cumulative count and percentage. Percentages are rounded to two
//! decimals; counts are exact.
//!
//! # Examples
//!
//! ```
//! use ogive_stats::frequency_table::FrequencyTable;
//!
//! let table = FrequencyTable::new(&[10.0, 17.5, 25.0, 32.5, 40.0], &[1, 2, 2, 3]).unwrap();
//! let rows = table.rows();
//!
//! assert_eq!(rows[0].interval.to_string(), "[10.00, 17.50)");
//! assert_eq!(rows[3].interval.to_string(), "[32.50, 40.00]");
//! assert_eq!(rows[0].relative_percent, 12.5);
//! assert_eq!(rows[3].cumulative_count, 8);
//! assert_eq!(rows[3].cumulative_percent, 100.0);
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::{OgiveError, binning};

/// A class interval between two adjacent bin edges.
///
/// Displayed in mathematical notation with two decimals: `[lower, upper)` for
/// half-open intervals, `[lower, upper]` for the closed final interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassInterval {
    pub lower: f64,
    pub upper: f64,
    /// Whether `upper` is included (only for the last bin).
    pub closed: bool,
}

impl ClassInterval {
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if self.closed {
            (self.lower..=self.upper).contains(&value)
        } else {
            (self.lower..self.upper).contains(&value)
        }
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.lower, self.upper)
    }
}

impl fmt::Display for ClassInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.closed { ']' } else { ')' };
        write!(f, "[{:.2}, {:.2}{close}", self.lower, self.upper)
    }
}

impl Serialize for ClassInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One row of a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    pub interval: ClassInterval,
    pub count: u64,
    /// `count / total * 100`, rounded to two decimals.
    pub relative_percent: f64,
    /// Exact running sum of `count` up to and including this row.
    pub cumulative_count: u64,
    /// `cumulative_count / total * 100`, rounded to two decimals.
    pub cumulative_percent: f64,
}

/// Frequency report over a set of bins.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Builds the table from bin edges and counts.
    ///
    /// # Errors
    ///
    /// Fails if `edges` does not have exactly one more element than `counts`,
    /// if `counts` is empty, or if `counts` sums to zero.
    #[expect(clippy::cast_precision_loss)]
    pub fn new(edges: &[f64], counts: &[u64]) -> Result<Self, OgiveError> {
        let total = binning::validated_total(edges, counts)?;
        let last = counts.len() - 1;

        let mut cumulative_count = 0;
        let rows = counts
            .iter()
            .zip(edges.windows(2))
            .enumerate()
            .map(|(i, (&count, bounds))| {
                cumulative_count += count;
                FrequencyRow {
                    interval: ClassInterval {
                        lower: bounds[0],
                        upper: bounds[1],
                        closed: i == last,
                    },
                    count,
                    relative_percent: round2(count as f64 / total as f64 * 100.0),
                    cumulative_count,
                    cumulative_percent: round2(cumulative_count as f64 / total as f64 * 100.0),
                }
            })
            .collect();

        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyRow> + '_ {
        self.rows.iter()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.rows.last().map_or(0, |row| row.cumulative_count)
    }
}

/// Rounds to two decimals, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_bins() {
        let table = FrequencyTable::new(&[0.0, 1.0, 2.0, 3.0], &[1, 1, 1]).unwrap();
        let rows = table.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.interval.lower).collect::<Vec<_>>(),
            vec![0.0, 1.0, 2.0]
        );
        assert_eq!(rows[0].relative_percent, 33.33);
        assert_eq!(rows[1].cumulative_percent, 66.67);
        assert_eq!(rows[2].cumulative_percent, 100.0);
        assert_eq!(rows[2].cumulative_count, 3);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_only_last_interval_closed() {
        let table = FrequencyTable::new(&[0.0, 0.5, 1.0], &[4, 1]).unwrap();
        assert!(!table.rows()[0].interval.closed);
        assert!(table.rows()[1].interval.closed);
        assert!(!table.rows()[0].interval.contains(0.5));
        assert!(table.rows()[1].interval.contains(1.0));
        assert_eq!(table.rows()[1].interval.midpoint(), 0.75);
    }

    #[test]
    fn test_interval_labels() {
        let interval = ClassInterval {
            lower: 1.0 / 3.0,
            upper: 2.005,
            closed: false,
        };
        assert_eq!(interval.to_string(), "[0.33, 2.00)");
        let closed = ClassInterval {
            lower: -1.5,
            upper: 100.0,
            closed: true,
        };
        assert_eq!(closed.to_string(), "[-1.50, 100.00]");
    }

    #[test]
    fn test_cumulative_counts_exact() {
        let counts = [3, 0, 7, 11, 0, 2, 1];
        let edges = (0..=7).map(f64::from).collect::<Vec<_>>();
        let table = FrequencyTable::new(&edges, &counts).unwrap();

        let sum = table.iter().map(|r| r.count).sum::<u64>();
        assert_eq!(sum, 24);
        assert_eq!(table.total(), 24);
        let cumulative = table.iter().map(|r| r.cumulative_count).collect::<Vec<_>>();
        assert_eq!(cumulative, vec![3, 3, 10, 21, 21, 23, 24]);
        assert_eq!(table.rows().last().unwrap().cumulative_percent, 100.0);
    }

    #[test]
    fn test_rejects_zero_total() {
        assert_eq!(
            FrequencyTable::new(&[0.0, 1.0, 2.0], &[0, 0]),
            Err(OgiveError::ZeroTotal)
        );
    }

    #[test]
    fn test_serializes_interval_label() {
        let table = FrequencyTable::new(&[0.0, 5.0, 10.0], &[1, 3]).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json[0]["interval"], "[0.00, 5.00)");
        assert_eq!(json[1]["interval"], "[5.00, 10.00]");
        assert_eq!(json[1]["relative_percent"], 75.0);
        assert_eq!(json[1]["cumulative_count"], 4);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(12.5), 12.5);
    }
}
