//! Plain-text rendering of a [`Report`].

use std::io::{self, Write};

use ogive_stats::curve::OgiveCurve;

use super::Report;

pub(super) fn write_report<W>(out: &mut W, report: &Report) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Ogive Report (data: {})", report.provenance)?;
    writeln!(out, "====================================")?;
    if let Some(reason) = report.fallback_reason {
        writeln!(out, "  Fallback: {reason}")?;
    }
    writeln!(out)?;

    write_summary(out, report)?;
    writeln!(out)?;
    write_interpretation(out, report)?;
    writeln!(out)?;
    write_curve(out, report.less_than)?;
    writeln!(out)?;
    write_curve(out, report.greater_than)?;
    writeln!(out)?;
    write_frequency_table(out, report)?;
    Ok(())
}

fn write_summary<W>(out: &mut W, report: &Report) -> io::Result<()>
where
    W: Write,
{
    let summary = &report.summary;
    writeln!(out, "Summary")?;
    writeln!(out, "  Count:  {:10}", summary.count)?;
    writeln!(out, "  Mean:   {:10.2}", summary.mean)?;
    writeln!(out, "  StdDev: {:10.2}", summary.std_dev)?;
    writeln!(out, "  Min:    {:10.2}", summary.min)?;
    writeln!(out, "  Q1:     {:10.2}", summary.q1)?;
    writeln!(out, "  Median: {:10.2}", summary.median)?;
    writeln!(out, "  Q3:     {:10.2}", summary.q3)?;
    writeln!(out, "  Max:    {:10.2}", summary.max)?;
    Ok(())
}

fn write_interpretation<W>(out: &mut W, report: &Report) -> io::Result<()>
where
    W: Write,
{
    let interpretation = &report.interpretation;
    writeln!(out, "Pass Mark {:.2}", interpretation.pass_mark)?;
    writeln!(out, "  Below:  {:9.2}%", interpretation.percent_below)?;
    writeln!(out, "  Above:  {:9.2}%", interpretation.percent_above)?;
    writeln!(
        out,
        "  {:.0}% of the sample lies below {:.2}",
        interpretation.percentile, interpretation.value_at_percentile
    )?;
    Ok(())
}

fn write_curve<W>(out: &mut W, curve: &OgiveCurve) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Ogive ({})", curve.kind())?;
    writeln!(out, "  {:>10} {:>10}", "Value", "Percent")?;
    writeln!(out, "  {}", "-".repeat(21))?;
    for (value, percentage) in curve.points() {
        writeln!(out, "  {value:>10.2} {percentage:>10.2}")?;
    }
    Ok(())
}

fn write_frequency_table<W>(out: &mut W, report: &Report) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Frequency Table")?;
    writeln!(
        out,
        "  {:<20} {:>8} {:>10} {:>10} {:>10}",
        "Interval", "Count", "Relative%", "CumCount", "Cum%"
    )?;
    // interval(20) + count(8) + relative(10) + cum_count(10) + cum_percent(10) + spaces(4)
    writeln!(out, "  {}", "-".repeat(62))?;
    for row in report.frequency_table.iter() {
        writeln!(
            out,
            "  {:<20} {:>8} {:>10.2} {:>10} {:>10.2}",
            row.interval.to_string(),
            row.count,
            row.relative_percent,
            row.cumulative_count,
            row.cumulative_percent,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ogive_sample::provider::{AcquiredSample, Provenance};
    use ogive_stats::{analysis::OgiveAnalysis, sample::Sample};

    use super::*;
    use crate::command::params::SampleArg;

    fn render(provenance: Provenance, fallback_reason: Option<&str>) -> String {
        let acquired = AcquiredSample {
            sample: Sample::new(vec![10.0, 10.0, 20.0, 20.0, 30.0, 30.0, 40.0, 40.0]).unwrap(),
            provenance,
            fallback_reason: fallback_reason.map(str::to_owned),
        };
        let analysis = OgiveAnalysis::new(&acquired.sample, 4).unwrap();
        let parameters = SampleArg {
            bins: 4,
            pass_mark: 25.0,
            ..SampleArg::default()
        }
        .parameters();
        let report = Report::new(&acquired, &analysis, parameters);

        let mut buf = Vec::new();
        write_report(&mut buf, &report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_report() {
        let text = render(Provenance::Sheet, None);

        assert!(text.starts_with("Ogive Report (data: sheet)\n"), "{text}");
        assert!(!text.contains("Fallback"));
        assert!(text.contains("  Below:      50.00%\n"), "{text}");
        assert!(text.contains("  75% of the sample lies below 32.50\n"), "{text}");
        assert!(text.contains("Ogive (less-than)\n"));
        assert!(text.contains("Ogive (greater-than)\n"));
        assert!(text.contains("[32.50, 40.00]"), "{text}");
        assert!(text.contains("[10.00, 17.50)"), "{text}");
    }

    #[test]
    fn test_text_report_with_fallback() {
        let text = render(Provenance::Simulated, Some("failed to open scores.csv"));
        assert!(text.starts_with("Ogive Report (data: simulated)\n"));
        assert!(text.contains("  Fallback: failed to open scores.csv\n"));
    }
}
