use anyhow::Result;
use clap::Args as ClapArgs;
use std::path::PathBuf;

use panelens::config::Config;
use panelens::provider::ProviderKind;

#[derive(ClapArgs)]
pub struct Args {
    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub async fn execute(args: Args) -> Result<()> {
    let config = Config::load(args.config)?;

    for kind in ProviderKind::ALL {
        let provider = config.provider_config(kind);
        let marker = if kind == config.default_provider { "*" } else { " " };

        println!("{} {} ({})", marker, kind.display_name(), kind);
        println!(
            "    launch: {}",
            provider.launch_command_for(&config.default_profile)
        );
        println!("    exit:   {}", provider.exit_command);
        for indicator in &provider.markers.error_indicators {
            println!("    error:  {}", indicator);
        }
    }

    Ok(())
}
