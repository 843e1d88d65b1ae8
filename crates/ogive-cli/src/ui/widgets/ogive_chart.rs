use ogive_stats::{
    curve::{OgiveCurve, OgiveKind},
    percentiles::Percentiles,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::{Marker, merge::MergeStrategy},
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};

use crate::ui::widgets::style;

/// One ogive with its quartile markers and pass-mark guide lines.
pub struct OgiveChart<'a> {
    pub curve: &'a OgiveCurve,
    pub quartiles: &'a Percentiles,
    pub pass_mark: f64,
}

impl Widget for OgiveChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let curve_data = self.curve.points();
        let quartile_data = self
            .quartiles
            .iter()
            .map(|(_, value)| (value, self.curve.percentage_at(value)))
            .collect::<Vec<_>>();

        let x_bounds = x_bounds(self.curve.values(), self.pass_mark);
        let pass_percent = self.curve.percentage_at(self.pass_mark);
        let [vertical_guide, horizontal_guide] =
            guide_lines(self.curve.kind(), self.pass_mark, pass_percent, x_bounds);

        let title = match self.curve.kind() {
            OgiveKind::LessThan => format!(
                "Less-than ogive ({pass_percent:.2}% below {:.2})",
                self.pass_mark
            ),
            OgiveKind::GreaterThan => format!(
                "Greater-than ogive ({pass_percent:.2}% at or above {:.2})",
                self.pass_mark
            ),
        };

        let datasets = vec![
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style::PASS_MARK)
                .data(&vertical_guide),
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style::PASS_MARK)
                .data(&horizontal_guide),
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style::CURVE)
                .data(&curve_data),
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(style::QUARTILE)
                .data(&quartile_data),
        ];

        let x_axis = Axis::default()
            .title("Value")
            .bounds(x_bounds)
            .labels([
                format!("{:.1}", x_bounds[0]),
                format!("{:.1}", f64::midpoint(x_bounds[0], x_bounds[1])),
                format!("{:.1}", x_bounds[1]),
            ]);
        let y_axis = Axis::default()
            .title("%")
            .bounds([0.0, 100.0])
            .labels(["0", "50", "100"]);

        let chart = Chart::new(datasets)
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title(title),
            )
            .x_axis(x_axis)
            .y_axis(y_axis);

        Widget::render(chart, area, buf);
    }
}

/// X range covering the curve and the pass mark.
fn x_bounds(values: &[f64], pass_mark: f64) -> [f64; 2] {
    let first = values.first().copied().unwrap_or(pass_mark);
    let last = values.last().copied().unwrap_or(pass_mark);
    [first.min(pass_mark), last.max(pass_mark)]
}

/// Vertical and horizontal pass-mark guides.
///
/// The horizontal guide runs from the curve toward the side the percentage
/// counts: left for the less-than ogive, right for the greater-than ogive.
fn guide_lines(
    kind: OgiveKind,
    pass_mark: f64,
    pass_percent: f64,
    x_bounds: [f64; 2],
) -> [[(f64, f64); 2]; 2] {
    let vertical = [(pass_mark, 0.0), (pass_mark, pass_percent)];
    let end = match kind {
        OgiveKind::LessThan => x_bounds[0],
        OgiveKind::GreaterThan => x_bounds[1],
    };
    let horizontal = [(end, pass_percent), (pass_mark, pass_percent)];
    [vertical, horizontal]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_bounds() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(x_bounds(&values, 15.0), [10.0, 30.0]);
        assert_eq!(x_bounds(&values, 0.0), [0.0, 30.0]);
        assert_eq!(x_bounds(&values, 60.0), [10.0, 60.0]);
    }

    #[test]
    fn test_horizontal_guide_direction() {
        let [vertical, less_than] = guide_lines(OgiveKind::LessThan, 60.0, 40.0, [10.0, 90.0]);
        assert_eq!(vertical, [(60.0, 0.0), (60.0, 40.0)]);
        assert_eq!(less_than, [(10.0, 40.0), (60.0, 40.0)]);

        let [_, greater_than] = guide_lines(OgiveKind::GreaterThan, 60.0, 35.0, [10.0, 90.0]);
        assert_eq!(greater_than, [(90.0, 35.0), (60.0, 35.0)]);
    }
}
