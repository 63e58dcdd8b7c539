use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod args;
mod commands;
mod config;

use args::Args;
use config::Config;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("cartpolar={level}").parse()?),
        )
        .init();

    let config = Config::resolve(args.config.as_deref())?;
    debug!(?config, "resolved config");

    commands::run(args.command, &config)
}
