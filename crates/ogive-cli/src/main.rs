mod command;
mod logging;
mod tui;
mod ui;
mod util;

fn main() -> anyhow::Result<()> {
    logging::init()?;
    command::run()
}
