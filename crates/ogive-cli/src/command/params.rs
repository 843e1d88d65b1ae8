//! Parameters shared by every subcommand.

use anyhow::Context as _;
use clap::builder::RangedU64ValueParser;
use ogive_sample::{
    external::Location,
    provider::{self, AcquiredSample, SampleSource},
    synthetic::SyntheticConfig,
};
use serde::Serialize;

pub const MIN_SIZE: usize = 50;
pub const MAX_SIZE: usize = 10_000;
pub const MIN_BINS: usize = 5;
pub const MAX_BINS: usize = 30;
pub const MAX_SEED: u64 = 1_000_000;
pub const PASS_MARK_RANGE: (f64, f64) = (0.0, 100.0);

const DEFAULT_SIZE: usize = 300;
const DEFAULT_BINS: usize = 12;
const DEFAULT_SEED: u64 = 7;
const DEFAULT_PASS_MARK: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, clap::Args)]
pub(crate) struct SampleArg {
    /// Number of simulated scores
    #[arg(
        long,
        default_value_t = DEFAULT_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_SIZE as u64..=MAX_SIZE as u64),
    )]
    pub size: usize,

    /// Number of equal-width bins
    #[arg(
        long,
        default_value_t = DEFAULT_BINS,
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_BINS as u64..=MAX_BINS as u64),
    )]
    pub bins: usize,

    /// Base seed of the simulated scores
    #[arg(long, default_value_t = DEFAULT_SEED, value_parser = clap::value_parser!(u64).range(..=MAX_SEED))]
    pub seed: u64,

    /// How many times the simulated scores were regenerated from the base seed
    #[arg(long, default_value_t = 0)]
    pub regeneration: u64,

    /// Threshold used for the below/above interpretation
    #[arg(long, default_value_t = DEFAULT_PASS_MARK, value_parser = parse_pass_mark)]
    pub pass_mark: f64,

    /// Single-column CSV file or http(s) URL to read scores from
    ///
    /// Falls back to simulated scores if the data cannot be used.
    #[arg(long)]
    pub source: Option<Location>,
}

impl Default for SampleArg {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            bins: DEFAULT_BINS,
            seed: DEFAULT_SEED,
            regeneration: 0,
            pass_mark: DEFAULT_PASS_MARK,
            source: None,
        }
    }
}

/// Parameters echoed in the report.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Parameters {
    pub size: usize,
    pub bins: usize,
    pub seed: u64,
    pub regeneration: u64,
    pub pass_mark: f64,
    pub source: Option<Location>,
}

impl SampleArg {
    pub fn synthetic_config(&self) -> SyntheticConfig {
        SyntheticConfig {
            size: self.size,
            seed: self.seed,
            regeneration: self.regeneration,
        }
    }

    pub fn sample_source(&self) -> SampleSource {
        self.source
            .clone()
            .map_or(SampleSource::Synthetic, SampleSource::External)
    }

    pub fn parameters(&self) -> Parameters {
        Parameters {
            size: self.size,
            bins: self.bins,
            seed: self.seed,
            regeneration: self.regeneration,
            pass_mark: self.pass_mark,
            source: self.source.clone(),
        }
    }

    pub fn acquire(&self) -> anyhow::Result<AcquiredSample> {
        let acquired = provider::acquire(&self.sample_source(), &self.synthetic_config())
            .context("Failed to acquire a sample")?;
        tracing::info!(
            provenance = %acquired.provenance,
            values = acquired.sample.len(),
            "sample ready"
        );
        Ok(acquired)
    }
}

fn parse_pass_mark(s: &str) -> Result<f64, String> {
    let (min, max) = PASS_MARK_RANGE;
    let value = s
        .parse::<f64>()
        .map_err(|err| format!("`{s}` is not a number: {err}"))?;
    if !(min..=max).contains(&value) {
        return Err(format!("{value} is not in {min}..={max}"));
    }
    Ok(value)
}
