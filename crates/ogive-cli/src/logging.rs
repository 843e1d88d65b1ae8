use std::io;

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Environment variable holding the log filter directives.
pub const FILTER_ENV: &str = "OGIVE_LOG";

/// Installs the global subscriber.
///
/// Events go to stderr so that the report on stdout stays machine-readable.
/// The filter is read from [`FILTER_ENV`] and defaults to `info`.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(FILTER_ENV)
        .from_env()
        .with_context(|| format!("Invalid log filter in {FILTER_ENV}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("Failed to install log subscriber")
}
