//! Lumina - command-line front end for the Lumina social core.

mod app;
mod cli;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;

use crate::cli::Args;
use crate::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    tracing::info!("Starting Lumina");

    app::run(args).await
}
