use anyhow::Context as _;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ogive_sample::{
    provider::{AcquiredSample, Provenance},
    synthetic::SyntheticConfig,
};
use ogive_stats::analysis::OgiveAnalysis;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Spacing},
    style::{Color, Style},
    text::Text,
};

use crate::{
    command::params::{MAX_BINS, MIN_BINS, PASS_MARK_RANGE},
    tui::App,
    ui::widgets::{FrequencyTableView, OgiveChart, SummaryPanel},
};

/// Pass mark change per key press.
const PASS_MARK_STEP: f64 = 0.5;

#[derive(Debug)]
pub struct ExploreScreen {
    acquired: AcquiredSample,
    synthetic: SyntheticConfig,
    bins: usize,
    pass_mark: f64,
    analysis: OgiveAnalysis,
    status: Option<String>,
    should_exit: bool,
}

impl ExploreScreen {
    pub fn new(
        acquired: AcquiredSample,
        synthetic: SyntheticConfig,
        bins: usize,
        pass_mark: f64,
    ) -> anyhow::Result<Self> {
        let analysis = OgiveAnalysis::new(&acquired.sample, bins)
            .with_context(|| format!("Failed to build ogives with {bins} bins"))?;
        Ok(Self {
            acquired,
            synthetic,
            bins,
            pass_mark,
            analysis,
            status: None,
            should_exit: false,
        })
    }

    fn set_bins(&mut self, bins: usize) {
        let bins = bins.clamp(MIN_BINS, MAX_BINS);
        if bins == self.bins {
            return;
        }
        match OgiveAnalysis::new(&self.acquired.sample, bins) {
            Ok(analysis) => {
                self.bins = bins;
                self.analysis = analysis;
            }
            Err(err) => self.status = Some(format!("Cannot use {bins} bins: {err}")),
        }
    }

    fn shift_pass_mark(&mut self, delta: f64) {
        let (min, max) = PASS_MARK_RANGE;
        self.pass_mark = (self.pass_mark + delta).clamp(min, max);
    }

    /// Advances the regeneration counter and, for simulated data, redraws the
    /// sample. External data stays as loaded.
    fn regenerate(&mut self) {
        self.synthetic = self.synthetic.regenerated();
        if !self.acquired.provenance.is_simulated() {
            self.status = Some("External data is not regenerated".to_owned());
            return;
        }

        let result = self
            .synthetic
            .generate()
            .map_err(anyhow::Error::from)
            .and_then(|sample| {
                let analysis = OgiveAnalysis::new(&sample, self.bins)?;
                Ok((sample, analysis))
            });
        match result {
            Ok((sample, analysis)) => {
                self.acquired.sample = sample;
                self.analysis = analysis;
                self.status = None;
            }
            Err(err) => self.status = Some(format!("Regeneration failed: {err:#}")),
        }
    }

    fn help_line(&self) -> String {
        let status = match (&self.status, self.acquired.provenance) {
            (Some(status), _) => status.clone(),
            (None, Provenance::Simulated) => {
                format!("regeneration {}", self.synthetic.regeneration)
            }
            (None, Provenance::Sheet) => "external data".to_owned(),
        };
        format!(
            "←/→: Pass Mark | +/-: Bins ({}) | r: Regenerate | q/Esc: Quit | {status}",
            self.bins
        )
    }
}

impl App for ExploreScreen {
    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(event) = event.as_key_event() else {
            return;
        };
        if event.kind != KeyEventKind::Press {
            return;
        }
        match event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Left => self.shift_pass_mark(-PASS_MARK_STEP),
            KeyCode::Right => self.shift_pass_mark(PASS_MARK_STEP),
            KeyCode::Char('+' | '=') => self.set_bins(self.bins + 1),
            KeyCode::Char('-') => self.set_bins(self.bins.saturating_sub(1)),
            KeyCode::Char('r') => self.regenerate(),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let [charts_area, bottom_area] =
            Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
                .spacing(Spacing::Overlap(1))
                .areas(main_area);

        let [less_than_pane, greater_than_pane] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(charts_area);

        let [summary_pane, table_pane] =
            Layout::horizontal([Constraint::Length(40), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(bottom_area);

        let less_than_chart = OgiveChart {
            curve: &self.analysis.less_than,
            quartiles: &self.analysis.quartiles,
            pass_mark: self.pass_mark,
        };
        let greater_than_chart = OgiveChart {
            curve: &self.analysis.greater_than,
            quartiles: &self.analysis.quartiles,
            pass_mark: self.pass_mark,
        };
        let summary = SummaryPanel {
            analysis: &self.analysis,
            provenance: self.acquired.provenance,
            fallback_reason: self.acquired.fallback_reason.as_deref(),
            pass_mark: self.pass_mark,
        };
        let table = FrequencyTableView {
            table: &self.analysis.table,
        };

        frame.render_widget(less_than_chart, less_than_pane);
        frame.render_widget(greater_than_chart, greater_than_pane);
        frame.render_widget(summary, summary_pane);
        frame.render_widget(table, table_pane);

        let help_text = Text::from(self.help_line())
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ogive_stats::sample::Sample;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn simulated_screen() -> ExploreScreen {
        let synthetic = SyntheticConfig {
            size: 200,
            seed: 11,
            regeneration: 0,
        };
        let acquired = AcquiredSample {
            sample: synthetic.generate().unwrap(),
            provenance: Provenance::Simulated,
            fallback_reason: None,
        };
        ExploreScreen::new(acquired, synthetic, 12, 60.0).unwrap()
    }

    #[test]
    fn test_pass_mark_keys() {
        let mut screen = simulated_screen();
        screen.handle_event(&key(KeyCode::Right));
        assert_eq!(screen.pass_mark, 60.5);
        screen.handle_event(&key(KeyCode::Left));
        screen.handle_event(&key(KeyCode::Left));
        assert_eq!(screen.pass_mark, 59.5);

        screen.pass_mark = 100.0;
        screen.handle_event(&key(KeyCode::Right));
        assert_eq!(screen.pass_mark, 100.0);
    }

    #[test]
    fn test_bin_keys_rebuild_analysis() {
        let mut screen = simulated_screen();
        screen.handle_event(&key(KeyCode::Char('+')));
        assert_eq!(screen.bins, 13);
        assert_eq!(screen.analysis.binning.bin_count(), 13);
        assert_eq!(screen.analysis.table.rows().len(), 13);

        for _ in 0..20 {
            screen.handle_event(&key(KeyCode::Char('+')));
        }
        assert_eq!(screen.bins, MAX_BINS);

        for _ in 0..40 {
            screen.handle_event(&key(KeyCode::Char('-')));
        }
        assert_eq!(screen.bins, MIN_BINS);
        assert_eq!(screen.analysis.binning.bin_count(), MIN_BINS);
    }

    #[test]
    fn test_regenerate_simulated() {
        let mut screen = simulated_screen();
        let before = screen.acquired.sample.clone();
        screen.handle_event(&key(KeyCode::Char('r')));

        assert_eq!(screen.synthetic.regeneration, 1);
        assert_ne!(screen.acquired.sample, before);
        assert_eq!(
            screen.acquired.sample,
            SyntheticConfig {
                size: 200,
                seed: 11,
                regeneration: 1,
            }
            .generate()
            .unwrap()
        );
        assert_eq!(screen.analysis.stats.count, 200);
    }

    #[test]
    fn test_regenerate_keeps_external_data() {
        let acquired = AcquiredSample {
            sample: Sample::new(vec![10.0, 20.0, 30.0, 40.0]).unwrap(),
            provenance: Provenance::Sheet,
            fallback_reason: None,
        };
        let mut screen =
            ExploreScreen::new(acquired, SyntheticConfig::default(), 5, 60.0).unwrap();
        screen.handle_event(&key(KeyCode::Char('r')));

        assert_eq!(screen.synthetic.regeneration, 1);
        assert_eq!(screen.acquired.sample.as_slice(), &[10.0, 20.0, 30.0, 40.0]);
        assert!(screen.status.is_some());
    }

    #[test]
    fn test_quit_keys() {
        let mut screen = simulated_screen();
        screen.handle_event(&key(KeyCode::Char('x')));
        assert!(!screen.should_exit());
        screen.handle_event(&key(KeyCode::Esc));
        assert!(screen.should_exit());
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut screen = simulated_screen();
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Right,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        screen.handle_event(&release);
        assert_eq!(screen.pass_mark, 60.0);
    }

    #[test]
    fn test_draw() {
        let screen = simulated_screen();
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        terminal.draw(|frame| screen.draw(frame)).unwrap();

        let rendered = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(rendered.contains("Less-than ogive"));
        assert!(rendered.contains("Greater-than ogive"));
        assert!(rendered.contains("Frequency table"));
        assert!(rendered.contains("q/Esc: Quit"));
    }
}
