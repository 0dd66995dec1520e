use anyhow::{bail, Result};
use clap::Args as ClapArgs;

use crate::commands::common::SourceArgs;

#[derive(ClapArgs)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the message with its raw offsets as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: Args) -> Result<()> {
    let config = args.source.load_config()?;
    let adapter = args.source.adapter(&config)?;

    let capture = args.source.read_capture(None).await?;
    let message = match adapter.extract_message(&capture) {
        Ok(message) => message,
        Err(e) => bail!("Response not yet available: {}", e),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&message)?);
    } else {
        println!("{}", message.text);
    }

    Ok(())
}
