use ogive_sample::provider::Provenance;
use ogive_stats::analysis::OgiveAnalysis;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::ui::widgets::style;

/// Descriptive summary and pass-mark interpretation.
pub struct SummaryPanel<'a> {
    pub analysis: &'a OgiveAnalysis,
    pub provenance: Provenance,
    pub fallback_reason: Option<&'a str>,
    pub pass_mark: f64,
}

impl Widget for SummaryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let analysis = self.analysis;
        let stats = &analysis.stats;
        let quartile = |p| analysis.quartiles.get(p).unwrap_or(f64::NAN);

        let provenance = self.provenance.to_string();
        let mut text = vec![Line::raw(format!("  Data:   {provenance:>10}"))];
        if let Some(reason) = self.fallback_reason {
            text.push(Line::styled(format!("  Fallback: {reason}"), style::NOTICE));
        }
        text.extend([
            Line::raw(format!("  Count:  {:10}", stats.count)),
            Line::raw(format!("  Mean:   {:10.2}", stats.mean)),
            Line::raw(format!("  StdDev: {:10.2}", stats.std_dev)),
            Line::raw(format!("  Min:    {:10.2}", stats.min)),
            Line::raw(format!("  Q1:     {:10.2}", quartile(25.0))),
            Line::raw(format!("  Median: {:10.2}", quartile(50.0))),
            Line::raw(format!("  Q3:     {:10.2}", quartile(75.0))),
            Line::raw(format!("  Max:    {:10.2}", stats.max)),
            Line::raw(""),
            Line::styled(
                format!("  Pass mark {:.2}", self.pass_mark),
                style::PASS_MARK,
            ),
            Line::raw(format!(
                "  Below:  {:9.2}%",
                analysis.percent_below(self.pass_mark)
            )),
            Line::raw(format!(
                "  Above:  {:9.2}%",
                analysis.percent_above(self.pass_mark)
            )),
            Line::raw(format!(
                "  P75:    {:10.2}",
                analysis.value_at_percentile(75.0)
            )),
        ]);

        let paragraph = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title("Summary"),
            );
        Widget::render(paragraph, area, buf);
    }
}
