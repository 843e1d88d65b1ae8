use serde::Serialize;

use crate::{
    OgiveError,
    binning::Binning,
    curve::{OgiveCurve, OgiveKind},
    descriptive::DescriptiveStats,
    frequency_table::FrequencyTable,
    percentiles::Percentiles,
    sample::Sample,
};

/// Percentile points reported as the quartiles.
pub const QUARTILE_POINTS: [f64; 3] = [25.0, 50.0, 75.0];

/// Everything derived from one `(sample, bin_count)` pair.
///
/// This structure combines:
/// - The equal-width binning of the sample
/// - The less-than and greater-than ogives built from it
/// - The frequency table of the bins
/// - Descriptive statistics and quartiles of the raw values
///
/// Nothing here is updated in place; a parameter change means building a new
/// `OgiveAnalysis`.
///
/// # Examples
///
/// ```
/// use ogive_stats::{analysis::OgiveAnalysis, sample::Sample};
///
/// let sample = Sample::new(vec![10.0, 10.0, 20.0, 20.0, 30.0, 30.0, 40.0, 40.0]).unwrap();
/// let analysis = OgiveAnalysis::new(&sample, 4).unwrap();
///
/// assert_eq!(analysis.percent_below(25.0), 50.0);
/// assert_eq!(analysis.percent_above(25.0), 50.0);
/// assert_eq!(analysis.value_at_percentile(50.0), 25.0);
/// assert_eq!(analysis.quartiles.get(50.0), Some(25.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgiveAnalysis {
    pub binning: Binning,
    pub less_than: OgiveCurve,
    pub greater_than: OgiveCurve,
    pub table: FrequencyTable,
    pub stats: DescriptiveStats,
    pub quartiles: Percentiles,
}

impl OgiveAnalysis {
    /// Runs every transform over `sample` with `bin_count` bins.
    ///
    /// # Errors
    ///
    /// Returns [`OgiveError::ZeroBinCount`] if `bin_count` is zero.
    pub fn new(sample: &Sample, bin_count: usize) -> Result<Self, OgiveError> {
        let binning = Binning::new(sample, bin_count)?;
        let less_than = OgiveCurve::from_binning(&binning, OgiveKind::LessThan)?;
        let greater_than = OgiveCurve::from_binning(&binning, OgiveKind::GreaterThan)?;
        let table = FrequencyTable::new(binning.edges(), binning.counts())?;

        let sorted = sample.sorted();
        let stats = DescriptiveStats::from_sorted(&sorted);
        let quartiles = Percentiles::from_sorted(&sorted, &QUARTILE_POINTS);

        Ok(Self {
            binning,
            less_than,
            greater_than,
            table,
            stats,
            quartiles,
        })
    }

    /// Percentage of the sample below `threshold`, read off the less-than ogive.
    #[must_use]
    pub fn percent_below(&self, threshold: f64) -> f64 {
        self.less_than.percentage_at(threshold)
    }

    /// Percentage of the sample at or above `threshold`, read off the
    /// greater-than ogive.
    #[must_use]
    pub fn percent_above(&self, threshold: f64) -> f64 {
        self.greater_than.percentage_at(threshold)
    }

    /// Value below which `percentile` percent of the sample lies, read off the
    /// less-than ogive.
    #[must_use]
    pub fn value_at_percentile(&self, percentile: f64) -> f64 {
        self.less_than.value_at(percentile)
    }

    /// Returns the curve of the given direction.
    #[must_use]
    pub fn curve(&self, kind: OgiveKind) -> &OgiveCurve {
        match kind {
            OgiveKind::LessThan => &self.less_than,
            OgiveKind::GreaterThan => &self.greater_than,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(values: &[f64], bins: usize) -> OgiveAnalysis {
        OgiveAnalysis::new(&Sample::new(values.to_vec()).unwrap(), bins).unwrap()
    }

    #[test]
    fn test_components_agree() {
        let analysis = analysis(&[3.0, 9.0, 1.0, 7.0, 7.0, 2.0, 8.0, 5.0, 6.0, 4.0], 3);
        let total = analysis.binning.total();
        assert_eq!(total, 10);
        assert_eq!(analysis.table.total(), total);
        assert_eq!(analysis.stats.count, 10);
        assert_eq!(analysis.less_than.values(), analysis.binning.edges());
        assert_eq!(analysis.greater_than.values(), analysis.binning.edges());

        let cumulative = analysis
            .table
            .iter()
            .map(|row| row.cumulative_percent)
            .collect::<Vec<_>>();
        for (table_pct, curve_pct) in cumulative.iter().zip(&analysis.less_than.percentages()[1..]) {
            assert!((table_pct - curve_pct).abs() <= 0.005);
        }
    }

    #[test]
    fn test_below_and_above_are_complementary_on_edges() {
        let analysis = analysis(&[1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0], 5);
        for &edge in analysis.binning.edges() {
            let sum = analysis.percent_below(edge) + analysis.percent_above(edge);
            assert!((sum - 100.0).abs() < 1e-9, "edge {edge}: {sum}");
        }
    }

    #[test]
    fn test_degenerate_sample() {
        let analysis = analysis(&[50.0, 50.0, 50.0], 5);
        assert!(analysis.binning.is_degenerate());
        assert_eq!(analysis.stats.std_dev, 0.0);
        assert_eq!(analysis.quartiles.get(25.0), Some(50.0));
        assert_eq!(analysis.percent_below(49.0), 0.0);
        assert_eq!(analysis.percent_below(51.0), 100.0);
        let mid = analysis.value_at_percentile(50.0);
        assert!((49.9..=50.1).contains(&mid), "{mid}");
    }

    #[test]
    fn test_curve_by_kind() {
        let analysis = analysis(&[0.0, 1.0], 2);
        assert_eq!(
            analysis.curve(OgiveKind::LessThan).kind(),
            OgiveKind::LessThan
        );
        assert_eq!(
            analysis.curve(OgiveKind::GreaterThan).kind(),
            OgiveKind::GreaterThan
        );
    }

    #[test]
    fn test_zero_bins() {
        let sample = Sample::new(vec![1.0]).unwrap();
        assert_eq!(
            OgiveAnalysis::new(&sample, 0),
            Err(OgiveError::ZeroBinCount)
        );
    }
}
