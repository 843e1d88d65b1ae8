use std::ops::Deref;

use serde::Serialize;

use crate::OgiveError;

/// A validated one-dimensional numeric sample.
///
/// A `Sample` always holds at least one value and every value is finite, so
/// the transforms downstream never have to deal with an empty range or `NaN`
/// ordering. The values keep their original order; none of the transforms
/// depend on it.
///
/// # Examples
///
/// ```
/// use ogive_stats::sample::Sample;
///
/// let sample = Sample::new(vec![3.0, 1.0, 2.0]).unwrap();
/// assert_eq!(sample.len(), 3);
/// assert_eq!(sample.min(), 1.0);
/// assert_eq!(sample.max(), 3.0);
///
/// assert!(Sample::new(vec![]).is_err());
/// assert!(Sample::new(vec![1.0, f64::NAN]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Validates `values` and wraps them.
    pub fn new(values: Vec<f64>) -> Result<Self, OgiveError> {
        if values.is_empty() {
            return Err(OgiveError::EmptySample);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(OgiveError::NonFiniteValue { index, value });
        }
        Ok(Self { values })
    }

    /// Smallest value in the sample.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value in the sample.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns a sorted copy of the values.
    #[must_use]
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for Sample {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = OgiveError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}
