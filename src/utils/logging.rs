use super::Config;
use anyhow::{Context, Result};
use std::io;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

/// Formatting subscriber capped at [`Config::LOG_LEVEL`], writing through `make_writer`.
pub fn log_subscriber<W>(make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_max_level(Config::LOG_LEVEL)
        .finish()
}

/// Installs [`log_subscriber`] on stderr as the process-wide default.
pub fn init_logging() -> Result<()> {
    tracing::subscriber::set_global_default(log_subscriber(io::stderr))
        .context("installing log subscriber")
}
