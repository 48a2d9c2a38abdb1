#![doc = include_str!("../README.md")]

mod cli;

use clap::Parser;
use cli::config::{Action, CliArgs, Config};
use cli::telemetry::init_telemetry;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry(config.log_format)?;

    match config.action {
        Action::Plate(action) => cli::commands::run_plate(action),
        Action::Fetch(fetch) => cli::commands::run_fetch(fetch).await,
    }
}
