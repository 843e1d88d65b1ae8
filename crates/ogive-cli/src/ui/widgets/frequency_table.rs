use ogive_stats::frequency_table::FrequencyTable;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    symbols::merge::MergeStrategy,
    text::Text,
    widgets::{Block, Cell, Row, Table, Widget},
};

use crate::ui::widgets::style;

pub struct FrequencyTableView<'a> {
    pub table: &'a FrequencyTable,
}

impl Widget for FrequencyTableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let header = Row::new(
            ["Interval", "Count", "Relative%", "CumCount", "Cum%"]
                .map(|label| Cell::from(Text::from(label).right_aligned())),
        )
        .style(style::HEADER);

        let rows = self.table.iter().map(|row| {
            Row::new([
                row.interval.to_string(),
                row.count.to_string(),
                format!("{:.2}", row.relative_percent),
                row.cumulative_count.to_string(),
                format!("{:.2}", row.cumulative_percent),
            ]
            .map(|value| Cell::from(Text::from(value).right_aligned())))
        });

        let widths = [
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(8),
        ];
        let table = Table::new(rows, widths).header(header).block(
            Block::bordered()
                .merge_borders(MergeStrategy::Exact)
                .title(format!("Frequency table (n = {})", self.table.total())),
        );

        Widget::render(table, area, buf);
    }
}
