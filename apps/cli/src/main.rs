mod args;
mod commands;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use locus::domain::config::LocusConfig;
use locus::kernel::config::load_config;
use locus_logger::Logger;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(cli.log_level)
        .json(cli.json_logs)
        .init()?;

    let config: LocusConfig =
        load_config(cli.config.as_deref()).context("Configuration is malformed")?;

    commands::run(cli.command, &config).await
}
