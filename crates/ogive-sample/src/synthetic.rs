//! Seeded synthetic exam-like scores.
//!
//! The generator draws a right-skewed mixture bounded to `[0, 100]`:
//!
//! - 70% of the values from a normal distribution with mean 62 and
//!   standard deviation 12
//! - the remaining values from a normal distribution with mean 78 and
//!   standard deviation 8
//!
//! Values are clipped to the score range rather than resampled. Generation is
//! fully deterministic for a given [`SyntheticConfig`].

use rand::{SeedableRng as _, distr::Distribution};
use rand_distr::{Normal, NormalError};
use rand_pcg::Pcg32;
use serde::Serialize;

use ogive_stats::{OgiveError, sample::Sample};

/// Lower and upper bound of generated scores.
pub const SCORE_RANGE: (f64, f64) = (0.0, 100.0);

const MAIN_COMPONENT: (f64, f64) = (62.0, 12.0);
const UPPER_COMPONENT: (f64, f64) = (78.0, 8.0);
const MAIN_SHARE: f64 = 0.7;

/// Parameters of the synthetic score generator.
///
/// `regeneration` counts how many times the user asked for fresh data with the
/// same base seed. It is added to `seed` to form the effective seed, so the
/// caller owns the counter rather than the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyntheticConfig {
    pub size: usize,
    pub seed: u64,
    pub regeneration: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            size: 300,
            seed: 7,
            regeneration: 0,
        }
    }
}

/// Error raised when the synthetic generator cannot produce a sample.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SyntheticError {
    #[display("sample size must be at least 1")]
    EmptySize,
    #[display("invalid normal distribution parameters")]
    Distribution(NormalError),
    #[display("generated values do not form a valid sample")]
    Sample(OgiveError),
}

impl SyntheticConfig {
    /// Seed actually fed to the random number generator.
    #[must_use]
    pub fn effective_seed(&self) -> u64 {
        self.seed.wrapping_add(self.regeneration)
    }

    /// Returns a copy with the regeneration counter advanced by one.
    #[must_use]
    pub fn regenerated(self) -> Self {
        Self {
            regeneration: self.regeneration + 1,
            ..self
        }
    }

    /// Draws the raw score values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ogive_sample::synthetic::SyntheticConfig;
    ///
    /// let config = SyntheticConfig { size: 50, seed: 1, regeneration: 0 };
    /// let scores = config.generate_values().unwrap();
    /// assert_eq!(scores.len(), 50);
    /// assert!(scores.iter().all(|v| (0.0..=100.0).contains(v)));
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn generate_values(&self) -> Result<Vec<f64>, SyntheticError> {
        if self.size == 0 {
            return Err(SyntheticError::EmptySize);
        }

        let main = Normal::new(MAIN_COMPONENT.0, MAIN_COMPONENT.1)
            .map_err(SyntheticError::Distribution)?;
        let upper = Normal::new(UPPER_COMPONENT.0, UPPER_COMPONENT.1)
            .map_err(SyntheticError::Distribution)?;
        let main_count = (self.size as f64 * MAIN_SHARE) as usize;

        let mut rng = Pcg32::seed_from_u64(self.effective_seed());
        let (lo, hi) = SCORE_RANGE;
        let values = (0..self.size)
            .map(|i| {
                let dist = if i < main_count { &main } else { &upper };
                dist.sample(&mut rng).clamp(lo, hi)
            })
            .collect();
        Ok(values)
    }

    /// Draws a validated [`Sample`].
    pub fn generate(&self) -> Result<Sample, SyntheticError> {
        let values = self.generate_values()?;
        Sample::new(values).map_err(SyntheticError::Sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_config_same_sample() {
        let config = SyntheticConfig::default();
        assert_eq!(config.generate().unwrap(), config.generate().unwrap());
    }

    #[test]
    fn test_regeneration_changes_sample() {
        let config = SyntheticConfig::default();
        let next = config.regenerated();
        assert_eq!(next.regeneration, 1);
        assert_eq!(next.effective_seed(), 8);
        assert_ne!(config.generate().unwrap(), next.generate().unwrap());
    }

    #[test]
    fn test_regeneration_matches_bumped_seed() {
        let regenerated = SyntheticConfig {
            size: 100,
            seed: 10,
            regeneration: 2,
        };
        let reseeded = SyntheticConfig {
            size: 100,
            seed: 12,
            regeneration: 0,
        };
        assert_eq!(
            regenerated.generate_values().unwrap(),
            reseeded.generate_values().unwrap()
        );
    }

    #[test]
    #[expect(clippy::cast_precision_loss)]
    fn test_values_bounded_and_skewed_toward_middle() {
        let config = SyntheticConfig {
            size: 5000,
            seed: 42,
            regeneration: 0,
        };
        let values = config.generate_values().unwrap();
        assert_eq!(values.len(), 5000);
        assert!(values.iter().all(|v| (0.0..=100.0).contains(v)));

        let mean = values.iter().sum::<f64>() / values.len() as f64;
        // Mixture mean is 0.7 * 62 + 0.3 * 78 = 66.8.
        assert!((mean - 66.8).abs() < 1.5, "mean = {mean}");
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = SyntheticConfig {
            size: 0,
            ..SyntheticConfig::default()
        };
        assert!(matches!(
            config.generate(),
            Err(SyntheticError::EmptySize)
        ));
    }
}
