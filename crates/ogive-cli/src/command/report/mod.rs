use std::path::PathBuf;

use anyhow::Context as _;
use ogive_sample::provider::{AcquiredSample, Provenance};
use ogive_stats::{
    analysis::OgiveAnalysis, curve::OgiveCurve, frequency_table::FrequencyTable,
};
use serde::Serialize;

use crate::{
    command::params::{Parameters, SampleArg},
    util::Output,
};

mod table;

/// Percentile whose value is quoted in the interpretation.
const QUOTED_PERCENTILE: f64 = 75.0;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    sample: SampleArg,
    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: ReportFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg {
        sample,
        format,
        output,
    } = arg;

    let acquired = sample.acquire()?;
    tracing::info!(bins = sample.bins, "building ogives");
    let analysis = OgiveAnalysis::new(&acquired.sample, sample.bins)
        .context("Failed to build ogives")?;
    let report = Report::new(&acquired, &analysis, sample.parameters());

    let mut output = Output::create(output.as_deref())?;
    match format {
        ReportFormat::Text => {
            table::write_report(&mut output, &report)?;
            output.finish()?;
        }
        ReportFormat::Json => output.write_json(&report)?,
    }
    tracing::info!(destination = output.target(), "report written");
    Ok(())
}

#[derive(Debug, Serialize)]
pub(crate) struct Report<'a> {
    pub provenance: Provenance,
    pub fallback_reason: Option<&'a str>,
    pub parameters: Parameters,
    pub summary: Summary,
    pub interpretation: Interpretation,
    pub less_than: &'a OgiveCurve,
    pub greater_than: &'a OgiveCurve,
    pub frequency_table: &'a FrequencyTable,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Interpretation {
    pub pass_mark: f64,
    /// Percent of the sample below the pass mark.
    pub percent_below: f64,
    /// Percent of the sample at or above the pass mark.
    pub percent_above: f64,
    pub percentile: f64,
    /// Value below which `percentile` percent of the sample lies.
    pub value_at_percentile: f64,
}

impl<'a> Report<'a> {
    pub fn new(
        acquired: &'a AcquiredSample,
        analysis: &'a OgiveAnalysis,
        parameters: Parameters,
    ) -> Self {
        let stats = &analysis.stats;
        let quartile = |p| analysis.quartiles.get(p).unwrap_or(f64::NAN);
        let summary = Summary {
            count: stats.count,
            mean: stats.mean,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
            q1: quartile(25.0),
            median: quartile(50.0),
            q3: quartile(75.0),
        };

        let pass_mark = parameters.pass_mark;
        let interpretation = Interpretation {
            pass_mark,
            percent_below: analysis.percent_below(pass_mark),
            percent_above: analysis.percent_above(pass_mark),
            percentile: QUOTED_PERCENTILE,
            value_at_percentile: analysis.value_at_percentile(QUOTED_PERCENTILE),
        };

        Self {
            provenance: acquired.provenance,
            fallback_reason: acquired.fallback_reason.as_deref(),
            parameters,
            summary,
            interpretation,
            less_than: &analysis.less_than,
            greater_than: &analysis.greater_than,
            frequency_table: &analysis.table,
        }
    }
}
