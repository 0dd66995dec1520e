use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Status(args) => commands::status::execute(args).await,
        Commands::Extract(args) => commands::extract::execute(args).await,
        Commands::Wait(args) => commands::wait::execute(args).await,
        Commands::Providers(args) => commands::providers::execute(args).await,
    }
}
