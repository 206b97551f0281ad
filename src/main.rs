use clap::Parser;
use tracing_subscriber::EnvFilter;

use wheelspin::cli::{Cli, Commands};
use wheelspin::commands::{handle_inspect_commands, handle_spin};
use wheelspin::services::config::load_config;

const LOG_ENV: &str = "WHEELSPIN_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Spin { .. } => handle_spin(&cli, &config)?,
        _ => handle_inspect_commands(&cli, &config)?,
    }

    Ok(())
}
