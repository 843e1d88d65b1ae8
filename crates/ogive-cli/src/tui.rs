use crossterm::event::{self, Event};
use ratatui::Frame;

/// Interactive screen driven by [`run`].
pub trait App {
    /// Returns whether the event loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Draws the whole screen.
    fn draw(&self, frame: &mut Frame);
}

/// Runs `app` until it asks to exit.
///
/// The screen is redrawn after every event, so nothing is rendered while the
/// application is idle.
pub fn run<A>(app: &mut A) -> anyhow::Result<()>
where
    A: App,
{
    ratatui::run(|terminal| {
        while !app.should_exit() {
            terminal.draw(|frame| app.draw(frame))?;
            let event = event::read()?;
            app.handle_event(&event);
        }
        Ok(())
    })
}
