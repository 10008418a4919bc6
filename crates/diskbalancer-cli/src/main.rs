//! Disk balancer CLI
//!
//! Command-line front end for creating disk balancer plans.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use diskbalancer_core::Settings;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { config, command } = Args::parse();

    let settings = Settings::load(config.as_deref()).context("Failed to load configuration")?;

    info!("Disk balancer started");

    match command {
        Commands::Plan(args) => Cli::new(settings).handle_plan_command(&args).await,
    }
}
