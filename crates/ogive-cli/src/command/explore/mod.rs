use crate::{command::params::SampleArg, tui};

use self::screen::ExploreScreen;

mod screen;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ExploreArg {
    #[clap(flatten)]
    sample: SampleArg,
}

pub(crate) fn run(arg: &ExploreArg) -> anyhow::Result<()> {
    let ExploreArg { sample } = arg;

    let acquired = sample.acquire()?;
    let mut screen = ExploreScreen::new(
        acquired,
        sample.synthetic_config(),
        sample.bins,
        sample.pass_mark,
    )?;
    tui::run(&mut screen)
}
