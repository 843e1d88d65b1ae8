use clap::{Parser, Subcommand};

use self::{explore::ExploreArg, report::ReportArg};

mod explore;
mod params;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the ogives, summary and frequency table
    Report(#[clap(flatten)] ReportArg),
    /// Explore the ogives in a terminal UI
    Explore(#[clap(flatten)] ExploreArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Report(ReportArg::default())) {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Explore(arg) => explore::run(&arg)?,
    }
    Ok(())
}
