use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use attn_cli::commands::{estimate, holidays, project, util};
use attn_cli::{Cli, Commands, Config};

/// Load config from the default locations plus an optional file.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Some(Commands::Project(args)) => {
            let config = load_config(cli.config.as_deref())?;
            let today = util::resolve_today(args.today.as_deref())?;
            project::run(&mut stdout, &config, args, today)?;
        }
        Some(Commands::Estimate(args)) => {
            let config = load_config(cli.config.as_deref())?;
            estimate::run(&mut stdout, &config, args)?;
        }
        Some(Commands::Holidays { year, json }) => {
            let config = load_config(cli.config.as_deref())?;
            holidays::run(&mut stdout, &config, *year, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
