//! Log output for the binary.
//!
//! Events go to stderr through a `fmt` layer so stdout carries only command
//! output. The filter comes from `RUST_LOG` and defaults to `info`.

use crate::cli::config::LogFormat;
use tracing_subscriber::{
    EnvFilter, fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt,
};

pub fn init_telemetry(format: LogFormat) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_target(false)
        .with_timer(ChronoLocal::rfc_3339())
        .with_file(true);

    match format {
        LogFormat::Pretty => registry.with(layer.pretty()).try_init()?,
        LogFormat::Json => registry.with(layer.json()).try_init()?,
    }
    Ok(())
}
