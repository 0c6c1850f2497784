//! Linkrank CLI
//!
//! Estimate the PageRank of a directory of hyperlinked pages.

use anyhow::Result;
use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::{Config, LinkRankError};

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("error: {:#}", e);
        let code = e
            .downcast_ref::<LinkRankError>()
            .map(LinkRankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::resolve_path);
    let config = Config::load_from(&config_path)?;

    match cli.command {
        Commands::Rank(args) => commands::rank::run(args, config, cli.format).await,
        Commands::Graph(args) => commands::graph::run(args, config, cli.format).await,
        Commands::Transition(args) => commands::transition::run(args, config, cli.format).await,
        Commands::Config(args) => commands::config::run(args, config, &config_path).await,
    }
}
