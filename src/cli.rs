use clap::{Parser, Subcommand};

use crate::commands::{extract, providers, status, wait};

#[derive(Parser)]
#[command(name = "panelens")]
#[command(about = "Read the state of AI coding CLIs running in tmux panes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify the current status of a pane or capture
    Status(status::Args),

    /// Print the latest completed response
    Extract(extract::Args),

    /// Poll a tmux pane until it reaches one of the given statuses
    Wait(wait::Args),

    /// List supported CLI providers
    Providers(providers::Args),
}
