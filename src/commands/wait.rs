use anyhow::{bail, Result};
use clap::Args as ClapArgs;
use std::time::Duration;

use crate::commands::common::{tmux_pane, SourceArgs};
use panelens::models::Status;
use panelens::session::PaneMonitor;

#[derive(ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Statuses to wait for (defaults to completed, waiting_user_answer, error)
    #[arg(short, long, value_delimiter = ',')]
    pub until: Vec<Status>,

    /// Polling interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Give up after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print the extracted response once the pane completes
    #[arg(long)]
    pub extract: bool,
}

pub async fn execute(args: Args) -> Result<()> {
    let Some(target) = args.source.target.as_deref() else {
        bail!("wait requires --target");
    };

    let config = args.source.load_config()?;
    let adapter = args.source.adapter(&config)?;
    let pane = tmux_pane(target).await?;
    let monitor = PaneMonitor::with_source(pane, adapter);

    let targets: Vec<Status> = if args.until.is_empty() {
        Status::ALL.into_iter().filter(Status::is_settled).collect()
    } else {
        args.until
    };
    let interval = args
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.polling.interval());
    let timeout = args
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.polling.timeout());

    let Some(status) = monitor
        .wait_for(&targets, interval, timeout, config.polling.tail_lines)
        .await?
    else {
        bail!("Timed out after {}s waiting for {}", timeout.as_secs(), target);
    };

    println!("{}", status);

    if args.extract && status == Status::Completed {
        let message = monitor.message().await?;
        println!("{}", message.text);
    }

    Ok(())
}
