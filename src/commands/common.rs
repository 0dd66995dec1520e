use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

use panelens::config::Config;
use panelens::provider::{ProviderAdapter, ProviderKind};
use panelens::session::{PaneSource, PaneTarget, TmuxPane};

/// Where a capture comes from and how to interpret it.
#[derive(ClapArgs)]
pub struct SourceArgs {
    /// Read the capture from a file ("-" for stdin)
    #[arg(short, long, conflicts_with = "target")]
    pub file: Option<PathBuf>,

    /// tmux pane to capture (session or session:window)
    #[arg(short, long)]
    pub target: Option<String>,

    /// CLI provider running in the pane (copilot, gemini, q)
    #[arg(short, long)]
    pub provider: Option<ProviderKind>,

    /// Agent profile shown in the idle prompt
    #[arg(long)]
    pub profile: Option<String>,

    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    pub fn load_config(&self) -> Result<Config> {
        Config::load(self.config.clone())
    }

    pub fn adapter(&self, config: &Config) -> Result<ProviderAdapter> {
        config.adapter(self.provider, self.profile.as_deref())
    }

    pub async fn read_capture(&self, tail_lines: Option<usize>) -> Result<String> {
        match (&self.file, &self.target) {
            (Some(path), _) if path.as_os_str() == "-" => {
                let mut capture = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut capture)
                    .await
                    .context("Failed to read capture from stdin")?;
                Ok(capture)
            }
            (Some(path), _) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read capture file: {:?}", path)),
            (None, Some(target)) => {
                let pane = tmux_pane(target).await?;
                pane.capture(tail_lines).await
            }
            (None, None) => bail!("Specify a capture with --file or --target"),
        }
    }
}

/// Resolve a tmux target, failing if its session is not running.
pub async fn tmux_pane(target: &str) -> Result<TmuxPane> {
    let pane = TmuxPane::new(PaneTarget::parse(target));
    if !pane.session_exists().await {
        bail!("Session {} does not exist", pane.target().session_name);
    }
    Ok(pane)
}
