//! Sample acquisition with synthetic fallback.
//!
//! [`acquire`] tries the requested source and, if external data cannot be
//! used for any reason, falls back to the synthetic generator. The fallback is
//! a recovered condition: it is logged and reported through
//! [`AcquiredSample::provenance`] and [`AcquiredSample::fallback_reason`], not
//! returned as an error.

use ogive_stats::sample::Sample;
use serde::Serialize;

use crate::{
    external::{self, Location, SourceError},
    synthetic::{SyntheticConfig, SyntheticError},
};

/// Requested origin of the sample.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SampleSource {
    /// Generate scores with the synthetic generator.
    #[default]
    Synthetic,
    /// Read scores from an external CSV location.
    External(Location),
}

/// Where the returned sample actually came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// External tabular data.
    #[display("sheet")]
    Sheet,
    /// The synthetic generator.
    #[display("simulated")]
    Simulated,
}

/// A sample together with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcquiredSample {
    pub sample: Sample,
    pub provenance: Provenance,
    /// Why external data was not used, if a fallback happened.
    pub fallback_reason: Option<String>,
}

/// Failure that survives the fallback: the synthetic generator itself failed.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("synthetic sample generation failed")]
pub struct AcquireError {
    source: SyntheticError,
}

/// Acquires a sample from `source`, falling back to `synthetic` on failure.
///
/// # Examples
///
/// ```
/// use ogive_sample::{
///     provider::{Provenance, SampleSource, acquire},
///     synthetic::SyntheticConfig,
/// };
///
/// let source = SampleSource::External("/no/such/file.csv".parse().unwrap());
/// let acquired = acquire(&source, &SyntheticConfig::default()).unwrap();
/// assert_eq!(acquired.provenance, Provenance::Simulated);
/// assert!(acquired.fallback_reason.is_some());
/// assert_eq!(acquired.sample.len(), 300);
/// ```
pub fn acquire(
    source: &SampleSource,
    synthetic: &SyntheticConfig,
) -> Result<AcquiredSample, AcquireError> {
    let fallback_reason = match source {
        SampleSource::Synthetic => None,
        SampleSource::External(location) => match load_external(location) {
            Ok(sample) => {
                tracing::info!(%location, values = sample.len(), "using external data");
                return Ok(AcquiredSample {
                    sample,
                    provenance: Provenance::Sheet,
                    fallback_reason: None,
                });
            }
            Err(err) => {
                let reason = error_chain(&err);
                tracing::warn!(%location, reason = %reason, "external data unavailable, falling back to simulated data");
                Some(reason)
            }
        },
    };

    let sample = synthetic
        .generate()
        .map_err(|source| AcquireError { source })?;
    tracing::debug!(
        size = synthetic.size,
        seed = synthetic.effective_seed(),
        "generated simulated data"
    );
    Ok(AcquiredSample {
        sample,
        provenance: Provenance::Simulated,
        fallback_reason,
    })
}

fn load_external(location: &Location) -> Result<Sample, SourceError> {
    let values = external::load(location)?;
    // `load` keeps finite values only and rejects empty input.
    Sample::new(values).map_err(|_| SourceError::NoNumericRows {
        location: location.to_string(),
    })
}

/// Joins an error and its sources into one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
