use anyhow::Result;
use clap::Args as ClapArgs;

use crate::commands::common::SourceArgs;

#[derive(ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only scan the last N lines of the capture
    #[arg(short = 'n', long)]
    pub tail_lines: Option<usize>,

    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: Args) -> Result<()> {
    let config = args.source.load_config()?;
    let adapter = args.source.adapter(&config)?;
    let tail_lines = args.tail_lines.or(config.polling.tail_lines);

    let capture = args.source.read_capture(tail_lines).await?;
    let status = adapter.get_status(&capture, tail_lines);

    if args.json {
        println!("{}", serde_json::json!({ "status": status }));
    } else {
        println!(
            "{} {:<20} {}",
            status.symbol(),
            status.as_str(),
            status.description()
        );
    }

    Ok(())
}
