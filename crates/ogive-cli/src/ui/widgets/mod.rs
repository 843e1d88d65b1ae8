pub use self::{
    frequency_table::FrequencyTableView, ogive_chart::OgiveChart, summary::SummaryPanel,
};

mod frequency_table;
mod ogive_chart;
mod summary;

mod style {
    use ratatui::style::{Color, Modifier, Style};

    pub const CURVE: Style = Style::new().fg(Color::Cyan);
    pub const QUARTILE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    pub const PASS_MARK: Style = Style::new().fg(Color::Magenta);
    pub const HEADER: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    pub const NOTICE: Style = Style::new().fg(Color::Red);
}
