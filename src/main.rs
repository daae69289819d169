//! chatmd binary entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatmd::cli::{Cli, Commands, ConfigAction};
use chatmd::Config;

/// Environment variable holding an explicit log filter.
const LOG_ENV: &str = "CHATMD_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Convert(args) => {
            let config = load_config(&cli)?;
            commands::convert::handle(args, &config)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(&load_config(&cli)?),
            ConfigAction::Init { force } => commands::config::handle_init(cli.config.as_deref(), *force),
        },
        Commands::Completions { shell } => {
            commands::completions::handle(*shell);
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Logs go to stderr so `--stdout` output stays clean.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
